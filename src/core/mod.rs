pub mod controller;
pub mod gate;
pub mod pagination;
pub mod query;
pub mod view;

pub use crate::domain::model::{Job, JobSearchResponse, PlanTier, SearchResult, SourceId};
pub use crate::domain::ports::{AddressBar, ConfigProvider, JobSearchBackend, SessionContext};
pub use crate::utils::error::Result;
