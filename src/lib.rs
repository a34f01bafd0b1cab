pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpVendorClient;
pub use config::{FileConfig, SearchConfig};
pub use crate::core::runner::{
    load_search_config, rejected_config, RunOutcome, RunReport, SeatScout,
};
pub use utils::error::{Result, ScoutError};
