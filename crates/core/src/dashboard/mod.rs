//! Composed reporting surfaces consumed by the presentation layer.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::DashboardService;
pub use types::{FinancialSummary, GroupShare, MonthlyOutflowChart, PropertySeries};
