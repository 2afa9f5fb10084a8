//! Text rendering of every page. All functions are pure: they take the
//! current state and return the styled page as a `String`.

mod admin;
mod analytics;
mod dashboard;
mod finance;
mod releases;
mod sidebar;

use chrono::NaiveDate;
use dialoguer::console::style;
use std::fmt::Display;

use common::aggregate::StatusFilter;
use common::router::View;
use common::Dashboard;

pub use admin::admin;
pub use analytics::analytics;
pub use dashboard::dashboard;
pub use finance::finance;
pub use releases::releases;
pub use sidebar::sidebar;

const LOADING: &str = "...";
const BAR_WIDTH: usize = 24;

/// Renders whatever page the router currently points at.
pub fn page(dash: &Dashboard, filter: StatusFilter) -> String {
    match dash.view() {
        View::Dashboard => dashboard(
            dash.user(),
            dash.releases(),
            dash.snapshot(),
            dash.analytics_loading(),
        ),
        View::Releases => releases(dash.releases(), dash.snapshot(), filter),
        View::Analytics => analytics(dash.snapshot(), dash.analytics_loading()),
        View::Finance => finance(dash.snapshot(), dash.analytics_loading()),
        View::Admin => admin(dash.releases()),
        View::Placeholder => placeholder(),
    }
}

pub fn placeholder() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n  {}\n",
        style("Section under construction").bold()
    ));
    out.push_str(&format!(
        "  {}\n",
        style("This section will be available soon").dim()
    ));
    out
}

fn heading(title: &str, subtitle: &str) -> String {
    format!(
        "\n  {}\n  {}\n\n",
        style(title).bold().underlined(),
        style(subtitle).dim()
    )
}

fn section(title: &str) -> String {
    format!("\n  {}\n", style(title).bold())
}

/// A labelled figure followed by an optional dimmed hint.
fn stat(label: &str, value: impl Display, hint: Option<&str>) -> String {
    let mut line = format!("  {:<22}{}", label, style(value).cyan().bold());
    if let Some(hint) = hint {
        line.push_str(&format!("  {}", style(hint).dim()));
    }
    line.push('\n');
    line
}

/// `value` unless the data behind it is still on its way.
fn or_loading(loading: bool, value: impl FnOnce() -> String) -> String {
    if loading {
        LOADING.to_string()
    } else {
        value()
    }
}

fn bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        style("█".repeat(filled)).magenta(),
        style("░".repeat(BAR_WIDTH - filled)).dim()
    )
}

fn date(d: NaiveDate) -> String {
    d.format("%-d %b %Y").to_string()
}

fn short_date(d: NaiveDate) -> String {
    d.format("%-d %b").to_string()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use entity::{
        AnalyticsSnapshot, FinancialRecord, PaymentStatus, Release, ReleaseStatus, ReleaseType,
        StreamRecord, Summary,
    };

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    pub fn release(id: i64, title: &str, status: ReleaseStatus) -> Release {
        Release {
            id,
            title: title.to_string(),
            artist_name: "DJ Alex".to_string(),
            release_type: ReleaseType::Ep,
            genre: Some("House".to_string()),
            release_date: Some(day(5)),
            status,
            track_count: 4,
            cover_url: None,
            upc: None,
        }
    }

    pub fn releases() -> Vec<Release> {
        vec![
            release(3, "Night Dreams", ReleaseStatus::Pending),
            Release {
                release_date: None,
                ..release(2, "Summer Collection", ReleaseStatus::Published)
            },
            release(1, "First Album", ReleaseStatus::Draft),
        ]
    }

    pub fn stream(
        release_id: i64,
        streams: i64,
        d: u32,
        platform: &str,
        country: &str,
    ) -> StreamRecord {
        StreamRecord {
            release_id: Some(release_id),
            streams,
            date: Some(day(d)),
            platform: Some(platform.to_string()),
            country: Some(country.to_string()),
        }
    }

    pub fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            summary: Summary {
                total_streams: 45230,
                balance: 1234.5,
                total_paid: 8000.0,
            },
            analytics: vec![
                stream(2, 30000, 4, "Spotify", "Russia"),
                stream(2, 10000, 3, "Apple Music", "Kazakhstan"),
                stream(3, 5230, 4, "Spotify", "Russia"),
            ],
            financials: vec![
                FinancialRecord {
                    id: 1,
                    platform: "Spotify".to_string(),
                    amount: 120.0,
                    status: PaymentStatus::Pending,
                    period_start: day(1),
                    period_end: day(30),
                    release_title: Some("Summer Collection".to_string()),
                },
                FinancialRecord {
                    id: 2,
                    platform: "Apple Music".to_string(),
                    amount: 80.25,
                    status: PaymentStatus::Paid,
                    period_start: day(1),
                    period_end: day(30),
                    release_title: None,
                },
            ],
        }
    }
}
