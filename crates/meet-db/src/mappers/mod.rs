//! Entity to model mappers
//!
//! This module provides conversions between domain entities (meet-core) and database models.
//! `From<Model> for Entity` converts database rows to domain objects.

mod event;
mod site_content;
mod user;
