use dialoguer::console::style;

use base::util::money;
use common::aggregate::pending_payment_total;
use entity::{AnalyticsSnapshot, FinancialRecord, PaymentStatus};

use super::{date, heading, or_loading, section, short_date, stat};

fn transaction(record: &FinancialRecord) -> String {
    let status = style(record.status.label());
    let status = match record.status {
        PaymentStatus::Paid => status.green(),
        PaymentStatus::Processing => status.cyan(),
        PaymentStatus::Pending => status.yellow(),
    };
    let mut line = format!("  {:<16}", record.platform);
    if let Some(title) = &record.release_title {
        line.push_str(&format!("{} ", style(title).italic()));
    }
    line.push_str(&format!(
        "{} - {}  {} {}\n",
        short_date(record.period_start),
        date(record.period_end),
        style(money(record.amount)).bold(),
        status
    ));
    line
}

pub fn finance(snapshot: Option<&AnalyticsSnapshot>, loading: bool) -> String {
    let mut out = heading("Finance", "Track your revenue and payouts");
    let summary = snapshot.map(|s| s.summary.clone()).unwrap_or_default();
    let financials = snapshot.map(|s| s.financials.as_slice()).unwrap_or_default();

    out.push_str(&stat(
        "Balance",
        or_loading(loading, || money(summary.balance)),
        None,
    ));
    out.push_str(&stat(
        "Paid",
        or_loading(loading, || money(summary.total_paid)),
        Some("all time"),
    ));
    out.push_str(&stat(
        "Expected",
        or_loading(loading, || money(pending_payment_total(financials))),
        Some("awaiting payout"),
    ));

    out.push_str(&section("Transaction history"));
    if financials.is_empty() {
        out.push_str(&format!("  {}\n", style("No transactions yet").dim()));
    }
    for record in financials {
        out.push_str(&transaction(record));
    }
    out
}
