//! Inclusive date-range filtering over any dated record.

use chrono::{DateTime, NaiveDate};

use hardstock_records::{ExpenseRecord, ProductRecord, PurchaseRecord, SaleRecord};

/// Anything exposing an ISO-8601 date string.
pub trait Dated {
    fn date(&self) -> Option<&str>;
}

impl Dated for ProductRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Dated for PurchaseRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Dated for SaleRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

impl Dated for ExpenseRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Parse a calendar day out of either a plain `YYYY-MM-DD` form value or an
/// RFC 3339 timestamp. Anything else is `None`.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Keep the records whose date falls in `[start, end]`, both bounds
/// inclusive.
///
/// Comparisons against an invalid date are normalized to "no match": an
/// unparseable record date excludes that record, and an unparseable bound
/// excludes everything.
pub fn filter_by_date<T: Dated + Clone>(records: &[T], start: &str, end: &str) -> Vec<T> {
    let (Some(start), Some(end)) = (parse_day(start), parse_day(end)) else {
        return Vec::new();
    };

    records
        .iter()
        .filter(|record| {
            record
                .date()
                .and_then(parse_day)
                .map(|day| start <= day && day <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
