use serde::{Deserialize, Serialize};

use hardstock_core::RecordId;

/// Stock-movement document as held in the `salesInvent` collection.
///
/// Each record represents quantity issued against a category/description
/// pair; the reconciler nets these against purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: RecordId,
    /// Category name; must match the catalog to count in any aggregate.
    pub name: String,
    pub description: String,
    pub stock_quantity: f64,
    pub measurement_unit: String,
    pub date: Option<String>,
}
