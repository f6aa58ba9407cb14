//! Sales summary card: per-category totals for the pie chart.

use serde::{Deserialize, Serialize};

use hardstock_core::Category;
use hardstock_records::ProductRecord;

/// Sales total for one category plus its share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: Category,
    pub total: f64,
    pub share_pct: f64,
}

/// Per-category price totals over the product snapshot, catalog order,
/// zero-total categories omitted (they would render as empty chart slices).
pub fn sales_by_category(products: &[ProductRecord]) -> Vec<CategorySales> {
    let grand: f64 = products.iter().map(|p| p.price).sum();

    Category::ALL
        .iter()
        .filter_map(|&category| {
            let total: f64 = products
                .iter()
                .filter(|p| p.name == category.name())
                .map(|p| p.price)
                .sum();
            if total > 0.0 {
                Some(CategorySales {
                    category,
                    total,
                    share_pct: if grand > 0.0 { total / grand * 100.0 } else { 0.0 },
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hardstock_core::RecordId;

    fn product(name: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id: RecordId::generate(),
            name: name.to_string(),
            description: String::new(),
            price,
            stock_quantity: 0.0,
            measurement_unit: String::new(),
            date: None,
        }
    }

    #[test]
    fn totals_and_shares() {
        let products = vec![
            product("CEMENT", 600.0),
            product("CEMENT", 200.0),
            product("TIMBER", 200.0),
        ];
        let sales = sales_by_category(&products);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].category, Category::Cement);
        assert_eq!(sales[0].total, 800.0);
        assert_eq!(sales[0].share_pct, 80.0);
        assert_eq!(sales[1].category, Category::Timber);
        assert_eq!(sales[1].share_pct, 20.0);
    }

    #[test]
    fn zero_total_categories_are_omitted() {
        assert!(sales_by_category(&[]).is_empty());
        assert!(sales_by_category(&[product("CEMENT", 0.0)]).is_empty());
    }

    #[test]
    fn off_catalog_products_count_toward_the_grand_total_only() {
        let products = vec![product("CEMENT", 50.0), product("GRAVEL", 50.0)];
        let sales = sales_by_category(&products);
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].total, 50.0);
        assert_eq!(sales[0].share_pct, 50.0);
    }
}
