pub mod availability;
pub mod context;
pub mod discovery;
pub mod runner;
pub mod time_window;

pub use crate::domain::model::{AvailableService, CandidateService, SeatSet};
pub use crate::domain::ports::VendorClient;
pub use crate::utils::error::Result;
pub use context::SearchContext;
pub use time_window::TimeWindow;
