//! Purchase summary card totals.

use hardstock_records::PurchaseRecord;

use crate::date_filter::filter_by_date;

/// Total purchase spend across a snapshot.
pub fn purchase_total(purchases: &[PurchaseRecord]) -> f64 {
    purchases.iter().map(|p| p.purchase_price).sum()
}

/// Total purchase spend within `[start, end]`.
///
/// An empty filter result falls back to the unfiltered total, matching the
/// summary card's display behavior.
pub fn purchase_total_in_range(purchases: &[PurchaseRecord], start: &str, end: &str) -> f64 {
    let filtered = filter_by_date(purchases, start, end);
    if filtered.is_empty() {
        purchase_total(purchases)
    } else {
        purchase_total(&filtered)
    }
}
