use dialoguer::console::style;

use base::util::group_thousands;
use common::aggregate::{platform_count, streams_by_country, streams_by_platform, Share};
use entity::AnalyticsSnapshot;

use super::{bar, heading, or_loading, section, stat};

fn table(out: &mut String, rows: &[Share<String>]) {
    if rows.is_empty() {
        out.push_str(&format!("  {}\n", style("No data yet").dim()));
    }
    for row in rows {
        out.push_str(&format!(
            "  {:<16}{} {} ({}%)\n",
            row.key,
            bar(row.percent),
            group_thousands(row.streams),
            row.percent
        ));
    }
}

pub fn analytics(snapshot: Option<&AnalyticsSnapshot>, loading: bool) -> String {
    let mut out = heading("Analytics", "Detailed streaming statistics");
    let records = snapshot.map(|s| s.analytics.as_slice()).unwrap_or_default();
    let total = snapshot.map(|s| s.summary.total_streams).unwrap_or_default();
    let countries = streams_by_country(records);

    out.push_str(&stat(
        "Total streams",
        or_loading(loading, || group_thousands(total)),
        None,
    ));
    out.push_str(&stat(
        "Platforms",
        or_loading(loading, || platform_count(records).to_string()),
        None,
    ));
    out.push_str(&stat(
        "Countries",
        or_loading(loading, || countries.len().to_string()),
        None,
    ));

    out.push_str(&section("Streams by country"));
    table(&mut out, &countries);
    out.push_str(&section("Streams by platform"));
    table(&mut out, &streams_by_platform(records));
    out
}
