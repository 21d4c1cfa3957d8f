//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod auth;
pub mod content;
pub mod context;
pub mod error;
pub mod event;
pub mod media;
pub mod profile;
pub mod user;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use content::ContentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use media::MediaService;
pub use profile::ProfileService;
pub use user::UserService;
