mod analytics;
mod release;
mod user;

pub use analytics::{AnalyticsSnapshot, FinancialRecord, PaymentStatus, StreamRecord, Summary};
pub use release::{
    CreatedRelease, NewRelease, Release, ReleaseList, ReleaseStatus, ReleaseType, StatusUpdate,
};
pub use user::{User, UserRole};
