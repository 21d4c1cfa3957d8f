//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod site_content;
mod user;

pub use event::EventModel;
pub use site_content::SiteContentModel;
pub use user::UserModel;
