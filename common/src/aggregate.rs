//! Values derived from the release and analytics stores. Everything in here is
//! recomputed from the current state on each render.

use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

use entity::{AnalyticsSnapshot, FinancialRecord, PaymentStatus, Release, ReleaseStatus, StreamRecord};

pub fn streams_for_release(snapshot: Option<&AnalyticsSnapshot>, release_id: i64) -> i64 {
    snapshot
        .map(|s| {
            s.analytics
                .iter()
                .filter(|r| r.release_id == Some(release_id))
                .map(|r| r.streams)
                .sum()
        })
        .unwrap_or(0)
}

pub fn count_by_status(releases: &[Release], status: ReleaseStatus) -> usize {
    releases.iter().filter(|r| r.status == status).count()
}

pub fn pending_payment_total(financials: &[FinancialRecord]) -> f64 {
    financials
        .iter()
        .filter(|f| f.status == PaymentStatus::Pending)
        .map(|f| f.amount)
        .sum()
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub draft: usize,
    pub pending: usize,
    pub published: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.draft + self.pending + self.published
    }

    pub fn get(&self, status: ReleaseStatus) -> usize {
        match status {
            ReleaseStatus::Draft => self.draft,
            ReleaseStatus::Pending => self.pending,
            ReleaseStatus::Published => self.published,
        }
    }
}

pub fn status_counts(releases: &[Release]) -> StatusCounts {
    releases
        .iter()
        .fold(StatusCounts::default(), |mut counts, r| {
            match r.status {
                ReleaseStatus::Draft => counts.draft += 1,
                ReleaseStatus::Pending => counts.pending += 1,
                ReleaseStatus::Published => counts.published += 1,
            }
            counts
        })
}

/// The tabs of the releases view.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReleaseStatus),
}

impl FromStr for StatusFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            s => ReleaseStatus::from_str(s).map(StatusFilter::Only),
        }
    }
}

impl From<Option<ReleaseStatus>> for StatusFilter {
    fn from(value: Option<ReleaseStatus>) -> Self {
        value.map_or(StatusFilter::All, StatusFilter::Only)
    }
}

pub fn filter_by_status(releases: &[Release], filter: StatusFilter) -> Vec<&Release> {
    releases
        .iter()
        .filter(|r| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => r.status == status,
        })
        .collect()
}

/// One line of a breakdown table. `percent` is relative to the table's
/// reference value (the largest row or the grand total).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share<K> {
    pub key: K,
    pub streams: i64,
    pub percent: u32,
}

fn percent(part: i64, whole: i64) -> u32 {
    if whole <= 0 || part <= 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

fn grouped<K, F>(records: &[StreamRecord], key: F) -> Vec<(K, i64)>
where
    K: Eq + Hash + Ord,
    F: Fn(&StreamRecord) -> Option<K>,
{
    records
        .iter()
        .filter_map(|r| key(r).map(|k| (k, r.streams)))
        .into_grouping_map()
        .sum()
        .into_iter()
        .collect()
}

fn by_total_share(mut rows: Vec<(String, i64)>) -> Vec<Share<String>> {
    let total: i64 = rows.iter().map(|(_, s)| s).sum();
    rows.sort_by(|(ka, sa), (kb, sb)| sb.cmp(sa).then_with(|| ka.cmp(kb)));
    rows.into_iter()
        .map(|(key, streams)| Share {
            key,
            streams,
            percent: percent(streams, total),
        })
        .collect()
}

/// Most recent `limit` days, newest first, scaled against the busiest day.
pub fn streams_by_day(records: &[StreamRecord], limit: usize) -> Vec<Share<NaiveDate>> {
    let mut days = grouped(records, |r| r.date);
    days.sort_by(|(a, _), (b, _)| b.cmp(a));
    days.truncate(limit);
    let max = days.iter().map(|(_, s)| *s).max().unwrap_or(0);
    days.into_iter()
        .map(|(key, streams)| Share {
            key,
            streams,
            percent: percent(streams, max),
        })
        .collect()
}

pub fn streams_by_platform(records: &[StreamRecord]) -> Vec<Share<String>> {
    by_total_share(grouped(records, |r| r.platform.clone()))
}

pub fn streams_by_country(records: &[StreamRecord]) -> Vec<Share<String>> {
    by_total_share(grouped(records, |r| r.country.clone()))
}

pub fn platform_count(records: &[StreamRecord]) -> usize {
    records
        .iter()
        .filter_map(|r| r.platform.as_deref())
        .collect::<HashSet<_>>()
        .len()
}
