//! Lenient decoding of raw store documents into typed records.
//!
//! The document store is schemaless and the dashboard recomputes on every
//! snapshot, so decoding must be total: a missing or malformed field
//! defaults (strings to empty, numbers to zero) instead of failing the
//! whole snapshot.

use serde_json::Value;

use hardstock_core::RecordId;

use crate::expense::ExpenseRecord;
use crate::product::ProductRecord;
use crate::purchase::PurchaseRecord;
use crate::sale::SaleRecord;

/// Numeric field: accepts JSON numbers and numeric strings; anything else
/// (including NaN/infinite string forms) contributes zero.
fn number(doc: &Value, key: &str) -> f64 {
    match doc.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn text(doc: &Value, key: &str) -> String {
    match doc.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn text_opt(doc: &Value, key: &str) -> Option<String> {
    match doc.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Date field: the store mixes plain `date` values from forms with
/// `createdAt` timestamps; prefer the former.
fn date(doc: &Value) -> Option<String> {
    text_opt(doc, "date").or_else(|| text_opt(doc, "createdAt"))
}

pub fn decode_product(id: RecordId, doc: &Value) -> ProductRecord {
    ProductRecord {
        id,
        name: text(doc, "name"),
        description: text(doc, "description"),
        price: number(doc, "price"),
        stock_quantity: number(doc, "stockQuantity"),
        measurement_unit: text(doc, "measurementUnit"),
        date: date(doc),
    }
}

pub fn decode_purchase(id: RecordId, doc: &Value) -> PurchaseRecord {
    PurchaseRecord {
        id,
        supplier_name: text(doc, "supplierName"),
        quantity_purchased: number(doc, "quantityPurchased"),
        purchase_price: number(doc, "purchasePrice"),
        description: text(doc, "description"),
        measurement_unit: text(doc, "measurementUnit"),
        date: date(doc),
    }
}

pub fn decode_sale(id: RecordId, doc: &Value) -> SaleRecord {
    SaleRecord {
        id,
        name: text(doc, "name"),
        description: text(doc, "description"),
        stock_quantity: number(doc, "stockQuantity"),
        measurement_unit: text(doc, "measurementUnit"),
        date: date(doc),
    }
}

pub fn decode_expense(id: RecordId, doc: &Value) -> ExpenseRecord {
    ExpenseRecord {
        id,
        category: text(doc, "category"),
        amount: number(doc, "amount"),
        date: date(doc),
    }
}
