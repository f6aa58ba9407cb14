use chrono::Utc;
use serde::{Deserialize, Serialize};

use hardstock_core::{DomainError, DomainResult, RecordId, supplier_category};

/// Purchase document as held in the `purchases` collection.
///
/// Purchases carry no category of their own; it is resolved through the
/// supplier lookup at reconciliation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: RecordId,
    pub supplier_name: String,
    pub quantity_purchased: f64,
    pub purchase_price: f64,
    pub description: String,
    pub measurement_unit: String,
    pub date: Option<String>,
}

/// User-entered form data for a new purchase, unvalidated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchaseDraft {
    pub supplier_name: String,
    pub quantity_purchased: f64,
    pub purchase_price: f64,
    pub description: String,
}

impl PurchaseDraft {
    pub fn validate(self) -> DomainResult<PurchaseRecord> {
        let category = supplier_category(&self.supplier_name)
            .ok_or_else(|| DomainError::validation("supplier is not in the catalog"))?;

        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if !self.quantity_purchased.is_finite() || self.quantity_purchased < 0.0 {
            return Err(DomainError::validation(
                "quantity purchased must be a non-negative number",
            ));
        }
        if !self.purchase_price.is_finite() || self.purchase_price < 0.0 {
            return Err(DomainError::validation(
                "purchase price must be a non-negative number",
            ));
        }

        Ok(PurchaseRecord {
            id: RecordId::generate(),
            supplier_name: self.supplier_name,
            quantity_purchased: self.quantity_purchased,
            purchase_price: self.purchase_price,
            description: self.description,
            measurement_unit: category.measurement_unit().to_string(),
            date: Some(Utc::now().to_rfc3339()),
        })
    }
}
