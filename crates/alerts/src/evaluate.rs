//! Threshold scan over category-level stock aggregates.

use serde::{Deserialize, Serialize};

use hardstock_core::{Category, StockThresholds};
use hardstock_reconcile::CategoryStock;

/// Alert severity class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    Overstock,
}

/// A human-readable stock alert for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub category: Category,
    pub kind: AlertKind,
    pub message: String,
}

/// Emit at most one alert per aggregate row, in input order.
///
/// Strict inequality on both sides: a value exactly at a threshold raises
/// nothing.
pub fn evaluate(rows: &[CategoryStock], thresholds: StockThresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for row in rows {
        if row.available_stock < thresholds.low {
            alerts.push(Alert {
                category: row.category,
                kind: AlertKind::LowStock,
                message: format!("Low stock on {} (RESTOCK)", row.category),
            });
        } else if row.available_stock > thresholds.high {
            alerts.push(Alert {
                category: row.category,
                kind: AlertKind::Overstock,
                message: format!("Overstock on {}", row.category),
            });
        }
    }

    alerts
}

/// Number of rows outside the `[low, high]` band (the notification badge).
pub fn alert_count(rows: &[CategoryStock], thresholds: StockThresholds) -> usize {
    rows.iter()
        .filter(|r| r.available_stock < thresholds.low || r.available_stock > thresholds.high)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(category: Category, available_stock: f64) -> CategoryStock {
        CategoryStock {
            category,
            purchases: 0.0,
            stock: 0.0,
            available_stock,
        }
    }

    #[test]
    fn in_band_raises_nothing() {
        let rows = vec![aggregate(Category::Cement, 500.0)];
        assert!(evaluate(&rows, StockThresholds::default()).is_empty());
    }

    #[test]
    fn low_stock_alert() {
        let rows = vec![aggregate(Category::Cement, 100.0)];
        let alerts = evaluate(&rows, StockThresholds::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::LowStock);
        assert_eq!(alerts[0].category, Category::Cement);
        assert_eq!(alerts[0].message, "Low stock on CEMENT (RESTOCK)");
    }

    #[test]
    fn overstock_alert() {
        let rows = vec![aggregate(Category::Cement, 2500.0)];
        let alerts = evaluate(&rows, StockThresholds::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Overstock);
        assert_eq!(alerts[0].message, "Overstock on CEMENT");
    }

    #[test]
    fn values_exactly_at_thresholds_raise_nothing() {
        let rows = vec![
            aggregate(Category::Timber, 200.0),
            aggregate(Category::Steel, 2000.0),
        ];
        assert!(evaluate(&rows, StockThresholds::default()).is_empty());
        assert_eq!(alert_count(&rows, StockThresholds::default()), 0);
    }

    #[test]
    fn alerts_follow_input_order() {
        let rows = vec![
            aggregate(Category::Glass, 10.0),
            aggregate(Category::Paint, 3000.0),
            aggregate(Category::Nails, 50.0),
        ];
        let alerts = evaluate(&rows, StockThresholds::default());
        let categories: Vec<Category> = alerts.iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![Category::Glass, Category::Paint, Category::Nails]
        );
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let rows = vec![aggregate(Category::Cement, 500.0)];
        let alerts = evaluate(&rows, StockThresholds { low: 600.0, high: 1000.0 });
        assert_eq!(alerts[0].kind, AlertKind::LowStock);
    }

    #[test]
    fn badge_counts_both_kinds() {
        let rows = vec![
            aggregate(Category::Glass, 10.0),
            aggregate(Category::Paint, 3000.0),
            aggregate(Category::Cement, 500.0),
        ];
        assert_eq!(alert_count(&rows, StockThresholds::default()), 2);
    }
}
