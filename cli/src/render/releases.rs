use dialoguer::console::style;

use base::util::group_thousands;
use common::aggregate::{filter_by_status, status_counts, streams_for_release, StatusFilter};
use entity::{AnalyticsSnapshot, Release, ReleaseStatus};

use super::{date, heading};

fn tab(label: &str, count: usize, active: bool) -> String {
    let text = format!("{} ({})", label, count);
    if active {
        format!("[{}]", style(text).magenta().bold())
    } else {
        format!(" {} ", text)
    }
}

fn status_badge(status: ReleaseStatus) -> String {
    let badge = style(status.label());
    match status {
        ReleaseStatus::Published => badge.green(),
        ReleaseStatus::Pending => badge.yellow(),
        ReleaseStatus::Draft => badge.dim(),
    }
    .to_string()
}

pub fn releases(
    releases: &[Release],
    snapshot: Option<&AnalyticsSnapshot>,
    filter: StatusFilter,
) -> String {
    let mut out = heading("Releases", "Manage your tracks and albums");

    let counts = status_counts(releases);
    let tabs = [
        tab("All", counts.total(), filter == StatusFilter::All),
        tab(
            "Published",
            counts.published,
            filter == StatusFilter::Only(ReleaseStatus::Published),
        ),
        tab(
            "In moderation",
            counts.pending,
            filter == StatusFilter::Only(ReleaseStatus::Pending),
        ),
        tab(
            "Drafts",
            counts.draft,
            filter == StatusFilter::Only(ReleaseStatus::Draft),
        ),
    ];
    out.push_str(&format!("  {}\n\n", tabs.join(" ")));

    let shown = filter_by_status(releases, filter);
    if shown.is_empty() {
        out.push_str(&format!("  {}\n", style("No releases yet").dim()));
        return out;
    }
    for release in shown {
        out.push_str(&format!(
            "  {} {}\n",
            style(&release.title).bold(),
            status_badge(release.status)
        ));
        out.push_str(&format!(
            "    {} · {} · {}\n",
            release.artist_name,
            release.release_type.label(),
            release
                .release_date
                .map(date)
                .unwrap_or_else(|| "Not specified".to_string())
        ));
        out.push_str(&format!(
            "    {} tracks · {} streams\n\n",
            release.track_count,
            group_thousands(streams_for_release(snapshot, release.id))
        ));
    }
    out
}
