pub mod aggregate;
pub mod dashboard;
pub mod fetch;
pub mod form;
pub mod notify;
pub mod router;
pub mod store;

pub use dashboard::Dashboard;
pub use fetch::{AnalyticsApi, ApiError, Client, ReleaseApi};
