//! The derived dashboard view.

use std::sync::{Arc, Mutex};

use hardstock_alerts::{Alert, evaluate};
use hardstock_core::StockThresholds;
use hardstock_ingest::{SnapshotHub, SubscriptionHandle};
use hardstock_reconcile::{
    CategoryInventory, CategoryStock, category_stock, reconcile_inventory,
};

/// Latest derived output. Replaced as a whole on every refresh.
#[derive(Debug, Clone, Default)]
struct DerivedState {
    inventory: Vec<CategoryInventory>,
    stock: Vec<CategoryStock>,
    alerts: Vec<Alert>,
}

/// Reactive dashboard view over a [`SnapshotHub`].
///
/// Each snapshot change triggers one synchronous, full recomputation from
/// whichever snapshots are currently held; a partial update therefore
/// recomputes against the last-known state of the other sets. While any set
/// is marked unavailable the previous derived output is retained
/// stale-but-valid instead of being cleared.
///
/// The hub subscription is released when the view is dropped.
pub struct DashboardView {
    hub: SnapshotHub,
    thresholds: StockThresholds,
    state: Arc<Mutex<DerivedState>>,
    _subscription: SubscriptionHandle,
}

impl DashboardView {
    pub fn attach(hub: SnapshotHub, thresholds: StockThresholds) -> Self {
        let state = Arc::new(Mutex::new(DerivedState::default()));
        refresh(&hub, thresholds, &state);

        let subscription = {
            let listener_hub = hub.clone();
            let listener_state = state.clone();
            hub.subscribe(move |set| {
                if listener_hub.any_unavailable() {
                    tracing::debug!(?set, "snapshot change held while upstream unavailable");
                    return;
                }
                refresh(&listener_hub, thresholds, &listener_state);
            })
        };

        Self {
            hub,
            thresholds,
            state,
            _subscription: subscription,
        }
    }

    /// Per-description inventory sections, catalog order.
    pub fn inventory(&self) -> Vec<CategoryInventory> {
        self.state
            .lock()
            .map(|s| s.inventory.clone())
            .unwrap_or_default()
    }

    /// Category-level stock aggregates, catalog order.
    pub fn category_stock(&self) -> Vec<CategoryStock> {
        self.state
            .lock()
            .map(|s| s.stock.clone())
            .unwrap_or_default()
    }

    /// Current stock alerts, catalog order.
    pub fn alerts(&self) -> Vec<Alert> {
        self.state
            .lock()
            .map(|s| s.alerts.clone())
            .unwrap_or_default()
    }

    /// True while any record set's upstream delivery is down; the derived
    /// values then reflect the last successful refresh.
    pub fn is_stale(&self) -> bool {
        self.hub.any_unavailable()
    }

    /// Force a recomputation from the currently held snapshots.
    pub fn refresh(&self) {
        refresh(&self.hub, self.thresholds, &self.state);
    }
}

fn refresh(hub: &SnapshotHub, thresholds: StockThresholds, state: &Mutex<DerivedState>) {
    let products = hub.products();
    let purchases = hub.purchases();
    let sales = hub.sales();

    let inventory = reconcile_inventory(&purchases, &sales);
    let stock = category_stock(&products, &purchases);
    let alerts = evaluate(&stock, thresholds);

    tracing::debug!(
        rows = inventory.iter().map(|s| s.rows.len()).sum::<usize>(),
        alerts = alerts.len(),
        "dashboard view refreshed"
    );

    if let Ok(mut derived) = state.lock() {
        *derived = DerivedState {
            inventory,
            stock,
            alerts,
        };
    }
}
