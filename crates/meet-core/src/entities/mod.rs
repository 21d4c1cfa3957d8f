//! Domain entities - core business objects

mod event;
mod site_content;
mod user;

pub use event::Event;
pub use site_content::SiteContent;
pub use user::User;
