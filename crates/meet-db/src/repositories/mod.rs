//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in meet-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod event;
mod site_content;
mod user;

pub use event::PgEventRepository;
pub use site_content::PgSiteContentRepository;
pub use user::PgUserRepository;
