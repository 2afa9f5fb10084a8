use dialoguer::console::style;

use base::util::{group_thousands, money};
use common::aggregate::{platform_count, status_counts, streams_by_day, streams_by_platform};
use entity::{AnalyticsSnapshot, Release, User};

use super::{bar, heading, or_loading, section, short_date, stat};

const DAYS: usize = 7;
const TOP_PLATFORMS: usize = 5;

pub fn dashboard(
    user: &User,
    releases: &[Release],
    snapshot: Option<&AnalyticsSnapshot>,
    loading: bool,
) -> String {
    let first_name = user.name.split_whitespace().next().unwrap_or_default();
    let mut out = heading(
        &format!("Welcome back, {}!", first_name),
        "Here is how your releases did over the last 7 days",
    );
    let summary = snapshot.map(|s| s.summary.clone()).unwrap_or_default();
    let records = snapshot.map(|s| s.analytics.as_slice()).unwrap_or_default();

    out.push_str(&stat(
        "Streams",
        or_loading(loading, || group_thousands(summary.total_streams)),
        None,
    ));
    out.push_str(&stat(
        "Revenue",
        or_loading(loading, || money(summary.balance)),
        None,
    ));
    let counts = status_counts(releases);
    out.push_str(&stat(
        "Releases",
        counts.total(),
        Some(&format!(
            "{} published, {} in moderation",
            counts.published, counts.pending
        )),
    ));
    out.push_str(&stat(
        "Platforms",
        or_loading(loading, || platform_count(records).to_string()),
        None,
    ));

    out.push_str(&section("Streams by day"));
    let days = streams_by_day(records, DAYS);
    if days.is_empty() {
        out.push_str(&format!("  {}\n", style("No streams yet").dim()));
    }
    for day in days {
        out.push_str(&format!(
            "  {:<8}{} {}\n",
            short_date(day.key),
            bar(day.percent),
            group_thousands(day.streams)
        ));
    }

    out.push_str(&section("Top platforms"));
    let platforms = streams_by_platform(records);
    if platforms.is_empty() {
        out.push_str(&format!("  {}\n", style("No streams yet").dim()));
    }
    for platform in platforms.into_iter().take(TOP_PLATFORMS) {
        out.push_str(&format!(
            "  {:<16}{} {} ({}%)\n",
            platform.key,
            bar(platform.percent),
            group_thousands(platform.streams),
            platform.percent
        ));
    }
    out
}
