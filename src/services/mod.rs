//! Business logic services

pub mod aggregation_service;
pub mod export_service;
pub mod filter_service;
pub mod standings_service;

pub use aggregation_service::AggregationService;
pub use export_service::ExportService;
pub use filter_service::FilterService;
pub use standings_service::{RunSummary, StandingsService};
