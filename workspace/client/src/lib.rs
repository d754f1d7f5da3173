//! Client side of the gym operations dashboard.
//!
//! Holds the JSON client for the analytics API, the four-request batch loader
//! and the load-cycle state shared by the browser and terminal front ends.
//! Network access goes through the [`Transport`] trait so the same code runs
//! over `gloo-net` in the browser and `reqwest` on the command line.

pub mod api;
pub mod error;
pub mod loader;
pub mod query;
pub mod state;
pub mod transport;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use loader::load_dashboard;
pub use query::{QueryParams, build_url};
pub use state::{BatchRequest, Completion, DashboardData, DashboardState, FetchState, Filters};
pub use transport::{RawResponse, Transport};
pub use view::{Insights, KpiCard, kpi_cards};
