pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpJobBackend, InMemoryAddressBar, StaticSession};
pub use config::{SearchSettings, TomlConfig};
pub use core::controller::{SearchController, SearchOutcome, SearchState, SearchView};
pub use core::query::{QueryModel, UrlParams};
pub use utils::error::{JobSearchError, Result};
