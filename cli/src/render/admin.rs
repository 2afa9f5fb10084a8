use dialoguer::console::style;

use common::aggregate::status_counts;
use entity::{Release, ReleaseStatus};

use super::{date, heading, section, stat};

/// Release totals and the queue of releases waiting for moderation.
pub fn admin(releases: &[Release]) -> String {
    let mut out = heading("Administration", "Moderate content submitted by artists");
    let counts = status_counts(releases);
    out.push_str(&stat("Releases", counts.total(), None));
    out.push_str(&stat("Published", counts.published, None));
    out.push_str(&stat("In moderation", counts.pending, None));
    out.push_str(&stat("Drafts", counts.draft, None));

    out.push_str(&section("Moderation queue"));
    let queue = releases
        .iter()
        .filter(|r| r.status == ReleaseStatus::Pending)
        .collect::<Vec<_>>();
    if queue.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            style("Nothing is waiting for moderation").dim()
        ));
    }
    for release in queue {
        out.push_str(&format!(
            "  {} {} {}\n",
            style(format!("#{:<4}", release.id)).dim(),
            style(&release.title).bold(),
            style(format!(
                "{} · {} · {}",
                release.artist_name,
                release.release_type.label(),
                release
                    .release_date
                    .map(date)
                    .unwrap_or_else(|| "Not specified".to_string())
            ))
            .dim()
        ));
    }
    out
}
