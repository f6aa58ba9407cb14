//! Integration tests for the full derivation pipeline.
//!
//! Snapshot delivery → hub → reconciliation → alert evaluation, including
//! partial updates and the stale-but-valid behavior while upstream is down.

use serde_json::json;

use hardstock_alerts::AlertKind;
use hardstock_core::{Category, RecordId, StockThresholds};
use hardstock_ingest::{RecordSet, SnapshotHub};
use hardstock_records::{PurchaseRecord, SaleRecord, decode_purchase};

use crate::view::DashboardView;

fn purchase(supplier: &str, description: &str, qty: f64) -> PurchaseRecord {
    PurchaseRecord {
        id: RecordId::generate(),
        supplier_name: supplier.to_string(),
        quantity_purchased: qty,
        purchase_price: 0.0,
        description: description.to_string(),
        measurement_unit: String::new(),
        date: None,
    }
}

fn sale(name: &str, description: &str, qty: f64) -> SaleRecord {
    SaleRecord {
        id: RecordId::generate(),
        name: name.to_string(),
        description: description.to_string(),
        stock_quantity: qty,
        measurement_unit: String::new(),
        date: None,
    }
}

fn attach() -> (SnapshotHub, DashboardView) {
    let hub = SnapshotHub::new();
    let view = DashboardView::attach(hub.clone(), StockThresholds::default());
    (hub, view)
}

#[test]
fn empty_snapshots_derive_a_complete_zeroed_view() {
    let (_hub, view) = attach();

    let inventory = view.inventory();
    assert_eq!(inventory.len(), 11);
    assert!(inventory.iter().all(|s| s.rows.is_empty()));

    let stock = view.category_stock();
    assert_eq!(stock.len(), 11);
    assert!(stock.iter().all(|r| r.available_stock == 0.0));

    // Zero available stock sits below the low threshold, so every category
    // raises a restock alert on an empty store.
    let alerts = view.alerts();
    assert_eq!(alerts.len(), 11);
    assert!(alerts.iter().all(|a| a.kind == AlertKind::LowStock));
}

#[test]
fn healthy_category_raises_no_alert() {
    let (hub, view) = attach();
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 500.0)]);

    let inventory = view.inventory();
    let row = &inventory[Category::Cement.index()].rows[0];
    assert_eq!(row.purchases, 500.0);
    assert_eq!(row.sales, 0.0);
    assert_eq!(row.available_stock, 500.0);

    assert!(
        view.alerts()
            .iter()
            .all(|a| a.category != Category::Cement)
    );
}

#[test]
fn low_stock_category_raises_restock_alert() {
    let (hub, view) = attach();
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 100.0)]);

    let alert = view
        .alerts()
        .into_iter()
        .find(|a| a.category == Category::Cement)
        .unwrap();
    assert_eq!(alert.kind, AlertKind::LowStock);
    assert_eq!(alert.message, "Low stock on CEMENT (RESTOCK)");
}

#[test]
fn overstocked_category_raises_overstock_alert() {
    let (hub, view) = attach();
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 2500.0)]);

    let alert = view
        .alerts()
        .into_iter()
        .find(|a| a.category == Category::Cement)
        .unwrap();
    assert_eq!(alert.kind, AlertKind::Overstock);
    assert_eq!(alert.message, "Overstock on CEMENT");
}

#[test]
fn unknown_supplier_records_are_dropped_without_disturbing_the_view() {
    let (hub, view) = attach();
    hub.replace_purchases(vec![
        purchase("UNKNOWN SUPPLIES", "A", 900.0),
        purchase("CEMENT SUPPLIES", "A", 500.0),
    ]);

    let inventory = view.inventory();
    let total_rows: usize = inventory.iter().map(|s| s.rows.len()).sum();
    assert_eq!(total_rows, 1);
    assert_eq!(inventory[Category::Cement.index()].rows[0].purchases, 500.0);
}

#[test]
fn partial_update_recomputes_against_last_known_snapshots() {
    let (hub, view) = attach();
    hub.replace_sales(vec![sale("CEMENT", "A", 100.0)]);
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 500.0)]);

    // The sales snapshot was not redelivered; the purchase update still
    // nets against it.
    let inventory = view.inventory();
    assert_eq!(
        inventory[Category::Cement.index()].rows[0].available_stock,
        400.0
    );
}

#[test]
fn unavailable_upstream_retains_stale_output() {
    let (hub, view) = attach();
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 500.0)]);
    let before = view.inventory();

    hub.mark_unavailable(RecordSet::Sales);
    assert!(view.is_stale());

    // Changes delivered while another set is down are held, not derived.
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 100.0)]);
    assert_eq!(view.inventory(), before);

    // Recovery resumes derivation from the held snapshots.
    hub.mark_available(RecordSet::Sales);
    assert!(!view.is_stale());
    assert_eq!(
        view.inventory()[Category::Cement.index()].rows[0].purchases,
        100.0
    );
}

#[test]
fn decoded_documents_flow_through_the_pipeline() {
    let (hub, view) = attach();
    let doc = json!({
        "supplierName": "TIMBER SUPPLIES",
        "quantityPurchased": "60",
        "purchasePrice": 18_000,
        "description": "2x4",
    });
    hub.replace_purchases(vec![decode_purchase(RecordId::new("p1"), &doc)]);

    let inventory = view.inventory();
    let row = &inventory[Category::Timber.index()].rows[0];
    assert_eq!(row.description, "2x4");
    assert_eq!(row.purchases, 60.0);
}

#[test]
fn dropping_the_view_releases_its_subscription() {
    let hub = SnapshotHub::new();
    {
        let _view = DashboardView::attach(hub.clone(), StockThresholds::default());
    }
    // Must not panic or deliver to a dropped listener.
    hub.replace_purchases(vec![purchase("CEMENT SUPPLIES", "A", 1.0)]);
}
