use chrono::Utc;
use serde::{Deserialize, Serialize};

use hardstock_core::{Category, DomainError, DomainResult, RecordId};

use crate::sale::SaleRecord;

/// Product document as held in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: RecordId,
    /// Category name; must match the catalog to count in any aggregate.
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub measurement_unit: String,
    /// ISO-8601 date of creation, when the document carries one.
    pub date: Option<String>,
}

/// User-entered form data for a new product, unvalidated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: f64,
}

/// Outcome of a validated product creation.
///
/// Creating a product writes two documents: the product itself and a
/// mirrored sale-side record carrying the opening stock, so the inventory
/// reconciliation sees the quantity as issued stock.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub product: ProductRecord,
    pub opening_stock: SaleRecord,
}

impl ProductDraft {
    /// Validate the form data and build the records to persist.
    ///
    /// The product name is case-normalized before the catalog check; numeric
    /// fields must be finite and non-negative.
    pub fn validate(self) -> DomainResult<NewProduct> {
        let category = Category::parse(&self.name.to_uppercase())
            .ok_or_else(|| DomainError::validation("product name is not in the catalog"))?;

        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        if !self.stock_quantity.is_finite() || self.stock_quantity < 0.0 {
            return Err(DomainError::validation(
                "stock quantity must be a non-negative number",
            ));
        }

        let created_at = Utc::now().to_rfc3339();
        let unit = category.measurement_unit().to_string();

        let product = ProductRecord {
            id: RecordId::generate(),
            name: category.name().to_string(),
            description: self.description.clone(),
            price: self.price,
            stock_quantity: self.stock_quantity,
            measurement_unit: unit.clone(),
            date: Some(created_at.clone()),
        };

        let opening_stock = SaleRecord {
            id: RecordId::generate(),
            name: category.name().to_string(),
            description: self.description.to_uppercase(),
            stock_quantity: self.stock_quantity,
            measurement_unit: unit,
            date: Some(created_at),
        };

        Ok(NewProduct {
            product,
            opening_stock,
        })
    }
}
