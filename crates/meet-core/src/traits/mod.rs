//! Domain ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    EventFilter, EventQuery, EventRepository, JoinOutcome, LeaveOutcome, RepoResult,
    SiteContentRepository, UserRepository,
};
