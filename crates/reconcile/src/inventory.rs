//! Per-description inventory reconciliation (the inventory page table).

use serde::{Deserialize, Serialize};

use hardstock_core::{Category, supplier_category};
use hardstock_records::{PurchaseRecord, SaleRecord};

/// One reconciled line: purchases netted against sales for a
/// (category, description) key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub description: String,
    pub purchases: f64,
    pub sales: f64,
    /// Signed net: `purchases - sales`. Negative when more stock was issued
    /// than purchased under this key.
    pub available_stock: f64,
}

/// All reconciled rows for one category, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInventory {
    pub category: Category,
    pub rows: Vec<InventoryRow>,
}

impl CategoryInventory {
    fn row_mut(&mut self, description: &str) -> Option<&mut InventoryRow> {
        self.rows.iter_mut().find(|r| r.description == description)
    }
}

/// Fold purchase and sale snapshots into one section per catalog category.
///
/// - Purchases resolve their category through the supplier lookup; records
///   from unknown suppliers are excluded, not an error.
/// - Sales resolve by exact category-name match; unknown names are excluded.
/// - Every catalog category gets a section (possibly empty), in catalog
///   order, so the output shape is deterministic for display.
///
/// `available_stock` is recomputed for every row in a final pass, which
/// makes the result independent of the order purchases and sales for the
/// same key arrive in.
pub fn reconcile_inventory(
    purchases: &[PurchaseRecord],
    sales: &[SaleRecord],
) -> Vec<CategoryInventory> {
    let mut sections: Vec<CategoryInventory> = Category::ALL
        .iter()
        .map(|&category| CategoryInventory {
            category,
            rows: Vec::new(),
        })
        .collect();

    for purchase in purchases {
        let Some(category) = supplier_category(&purchase.supplier_name) else {
            continue;
        };
        let section = &mut sections[category.index()];
        match section.row_mut(&purchase.description) {
            Some(row) => row.purchases += purchase.quantity_purchased,
            None => section.rows.push(InventoryRow {
                description: purchase.description.clone(),
                purchases: purchase.quantity_purchased,
                sales: 0.0,
                // Provisional; overwritten by the final pass below.
                available_stock: purchase.quantity_purchased,
            }),
        }
    }

    for sale in sales {
        let Some(category) = Category::parse(&sale.name) else {
            continue;
        };
        let section = &mut sections[category.index()];
        match section.row_mut(&sale.description) {
            Some(row) => row.sales += sale.stock_quantity,
            None => section.rows.push(InventoryRow {
                description: sale.description.clone(),
                purchases: 0.0,
                sales: sale.stock_quantity,
                available_stock: 0.0,
            }),
        }
    }

    for section in &mut sections {
        for row in &mut section.rows {
            row.available_stock = row.purchases - row.sales;
        }
    }

    sections
}
