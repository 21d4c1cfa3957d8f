//! # meet-storage
//!
//! Media file storage for profile photos and event images.
//!
//! ## Features
//!
//! - **MediaStore trait**: Storage abstraction the service layer works against
//! - **Local disk backend**: Files under a configurable root, served as static assets
//!
//! ## Example
//!
//! ```ignore
//! use meet_storage::{LocalMediaStore, MediaStore};
//!
//! let store = LocalMediaStore::new("./static", "/static");
//! store.ensure_root().await?;
//!
//! let url = store.store("user_42_profile.jpg", &bytes).await?;
//! assert_eq!(url, "/static/user_42_profile.jpg");
//! ```

pub mod media;

pub use media::{LocalMediaStore, MediaStore, StorageError, StorageResult};
