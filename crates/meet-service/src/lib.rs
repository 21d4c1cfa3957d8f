//! # meet-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AdminUpdateUserRequest, ContentResponse, CreateContentRequest, CreateEventRequest,
    EventResponse, HealthResponse, ImageUploadResponse, LoginRequest, MessageResponse,
    OnboardingStatusResponse, PhotoUploadResponse, ProfileResponse, ReadinessResponse,
    RegisterRequest, TokenForm, TokenResponse, UpdateContentRequest, UpdateEventRequest,
    UpdateMeRequest, UpdateProfileRequest, UserResponse,
};
pub use services::{
    AdminService, AuthService, ContentService, EventService, MediaService, ProfileService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
