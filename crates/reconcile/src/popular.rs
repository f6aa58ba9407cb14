//! Category-level stock aggregate (the dashboard's popular-products card).
//!
//! This variant differs from the per-description reconciliation on purpose
//! and the differences are load-bearing for display compatibility:
//!
//! - purchases are attributed by **substring** match on the supplier name,
//!   not through the supplier lookup;
//! - available stock is `|stock - purchases|`, never negative, where the
//!   signed variant can go below zero.
//!
//! Neither is unified with the other call site; the asymmetry is deliberate
//! pending a product decision.

use serde::{Deserialize, Serialize};

use hardstock_core::Category;
use hardstock_records::{ProductRecord, PurchaseRecord};

/// One category-level aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStock {
    pub category: Category,
    /// Sum of purchase quantities whose supplier name contains the category.
    pub purchases: f64,
    /// Stock quantity of the matching product record (0 when absent).
    pub stock: f64,
    /// `|stock - purchases|`; absolute by contract, never negative.
    pub available_stock: f64,
}

/// Total purchase spend attributed to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub category: Category,
    pub total_price: f64,
}

/// One aggregate row per catalog category, in catalog order.
pub fn category_stock(
    products: &[ProductRecord],
    purchases: &[PurchaseRecord],
) -> Vec<CategoryStock> {
    Category::ALL
        .iter()
        .map(|&category| {
            let stock = products
                .iter()
                .find(|p| p.name == category.name())
                .map(|p| p.stock_quantity)
                .unwrap_or(0.0);

            let purchased: f64 = purchases
                .iter()
                .filter(|p| p.supplier_name.contains(category.name()))
                .map(|p| p.quantity_purchased)
                .sum();

            CategoryStock {
                category,
                purchases: purchased,
                stock,
                available_stock: (stock - purchased).abs(),
            }
        })
        .collect()
}

/// Purchase spend per category for the spend chart, same substring
/// attribution as [`category_stock`].
pub fn purchase_spend_by_category(purchases: &[PurchaseRecord]) -> Vec<CategorySpend> {
    Category::ALL
        .iter()
        .map(|&category| CategorySpend {
            category,
            total_price: purchases
                .iter()
                .filter(|p| p.supplier_name.contains(category.name()))
                .map(|p| p.purchase_price)
                .sum(),
        })
        .collect()
}
