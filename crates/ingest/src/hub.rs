//! Snapshot hub: latest-value store plus synchronous pub/sub.
//!
//! Full-replace semantics per set: a delivered snapshot overwrites the
//! previous one for that set only, so a partial update still leaves the
//! last-known snapshots of the other sets in place for recomputation.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use hardstock_records::{ProductRecord, PurchaseRecord, SaleRecord};

/// The three upstream record sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordSet {
    Products,
    Purchases,
    Sales,
}

type Listener = Box<dyn Fn(RecordSet) + Send + Sync>;

struct HubShared {
    products: RwLock<Arc<Vec<ProductRecord>>>,
    purchases: RwLock<Arc<Vec<PurchaseRecord>>>,
    sales: RwLock<Arc<Vec<SaleRecord>>>,
    unavailable: Mutex<HashSet<RecordSet>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

/// Holds the latest snapshot per record set and notifies listeners
/// synchronously on every change.
///
/// Snapshots are exposed as `Arc` clones and must be treated as immutable
/// values. Listeners run on the delivering thread while the listener table
/// is locked, so they must not register or cancel subscriptions from inside
/// the callback.
#[derive(Clone)]
pub struct SnapshotHub {
    shared: Arc<HubShared>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(HubShared {
                products: RwLock::new(Arc::new(Vec::new())),
                purchases: RwLock::new(Arc::new(Vec::new())),
                sales: RwLock::new(Arc::new(Vec::new())),
                unavailable: Mutex::new(HashSet::new()),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn products(&self) -> Arc<Vec<ProductRecord>> {
        self.shared
            .products
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn purchases(&self) -> Arc<Vec<PurchaseRecord>> {
        self.shared
            .purchases
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn sales(&self) -> Arc<Vec<SaleRecord>> {
        self.shared
            .sales
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Replace the products snapshot and notify listeners.
    pub fn replace_products(&self, records: Vec<ProductRecord>) {
        tracing::debug!(count = records.len(), "products snapshot replaced");
        if let Ok(mut snapshot) = self.shared.products.write() {
            *snapshot = Arc::new(records);
        }
        self.recovered(RecordSet::Products);
        self.notify(RecordSet::Products);
    }

    /// Replace the purchases snapshot and notify listeners.
    pub fn replace_purchases(&self, records: Vec<PurchaseRecord>) {
        tracing::debug!(count = records.len(), "purchases snapshot replaced");
        if let Ok(mut snapshot) = self.shared.purchases.write() {
            *snapshot = Arc::new(records);
        }
        self.recovered(RecordSet::Purchases);
        self.notify(RecordSet::Purchases);
    }

    /// Replace the sales snapshot and notify listeners.
    pub fn replace_sales(&self, records: Vec<SaleRecord>) {
        tracing::debug!(count = records.len(), "sales snapshot replaced");
        if let Ok(mut snapshot) = self.shared.sales.write() {
            *snapshot = Arc::new(records);
        }
        self.recovered(RecordSet::Sales);
        self.notify(RecordSet::Sales);
    }

    /// Flag a set's upstream delivery as failed. The held snapshot is
    /// retained stale-but-valid; no notification is raised.
    pub fn mark_unavailable(&self, set: RecordSet) {
        tracing::warn!(?set, "upstream snapshot delivery unavailable");
        if let Ok(mut unavailable) = self.shared.unavailable.lock() {
            unavailable.insert(set);
        }
    }

    /// Clear a set's unavailable flag; listeners are notified so derivation
    /// resumes from the held snapshots.
    pub fn mark_available(&self, set: RecordSet) {
        let recovered = self
            .shared
            .unavailable
            .lock()
            .map(|mut unavailable| unavailable.remove(&set))
            .unwrap_or(false);
        if recovered {
            tracing::info!(?set, "upstream snapshot delivery recovered");
            self.notify(set);
        }
    }

    pub fn is_available(&self, set: RecordSet) -> bool {
        self.shared
            .unavailable
            .lock()
            .map(|unavailable| !unavailable.contains(&set))
            .unwrap_or(true)
    }

    pub fn any_unavailable(&self) -> bool {
        self.shared
            .unavailable
            .lock()
            .map(|unavailable| !unavailable.is_empty())
            .unwrap_or(false)
    }

    /// Register a listener invoked synchronously on every snapshot change.
    ///
    /// Dropping the returned handle unregisters the listener on all exit
    /// paths; [`SubscriptionHandle::cancel`] does so explicitly.
    pub fn subscribe(&self, listener: impl Fn(RecordSet) + Send + Sync + 'static) -> SubscriptionHandle {
        let id = self.shared.next_listener_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.shared.listeners.lock() {
            listeners.push((id, Box::new(listener)));
        }
        SubscriptionHandle {
            shared: Arc::downgrade(&self.shared),
            id,
        }
    }

    fn recovered(&self, set: RecordSet) {
        // A delivered snapshot implies the set's upstream works again.
        if let Ok(mut unavailable) = self.shared.unavailable.lock() {
            unavailable.remove(&set);
        }
    }

    fn notify(&self, set: RecordSet) {
        if let Ok(listeners) = self.shared.listeners.lock() {
            for (_, listener) in listeners.iter() {
                listener(set);
            }
        }
    }
}

impl Default for SnapshotHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation handle for a hub subscription.
pub struct SubscriptionHandle {
    shared: Weak<HubShared>,
    id: u64,
}

impl SubscriptionHandle {
    /// Unregister explicitly; equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            if let Ok(mut listeners) = shared.listeners.lock() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hardstock_core::RecordId;
    use std::sync::atomic::AtomicUsize;

    fn sale(name: &str, qty: f64) -> SaleRecord {
        SaleRecord {
            id: RecordId::generate(),
            name: name.to_string(),
            description: String::new(),
            stock_quantity: qty,
            measurement_unit: String::new(),
            date: None,
        }
    }

    #[test]
    fn replace_notifies_listeners_synchronously() {
        let hub = SnapshotHub::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_listener = seen.clone();
        let _sub = hub.subscribe(move |set| {
            if let Ok(mut sets) = seen_in_listener.lock() {
                sets.push(set);
            }
        });

        hub.replace_sales(vec![sale("CEMENT", 5.0)]);
        hub.replace_products(Vec::new());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![RecordSet::Sales, RecordSet::Products]
        );
        assert_eq!(hub.sales().len(), 1);
    }

    #[test]
    fn partial_replace_retains_other_snapshots() {
        let hub = SnapshotHub::new();
        hub.replace_sales(vec![sale("CEMENT", 5.0)]);
        hub.replace_purchases(Vec::new());
        assert_eq!(hub.sales().len(), 1);
    }

    #[test]
    fn cancelled_subscription_stops_delivery() {
        let hub = SnapshotHub::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_listener = calls.clone();
        let sub = hub.subscribe(move |_| {
            calls_in_listener.fetch_add(1, Ordering::SeqCst);
        });

        hub.replace_sales(Vec::new());
        sub.cancel();
        hub.replace_sales(Vec::new());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_handle_unregisters_too() {
        let hub = SnapshotHub::new();
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls_in_listener = calls.clone();
            let _sub = hub.subscribe(move |_| {
                calls_in_listener.fetch_add(1, Ordering::SeqCst);
            });
        }
        hub.replace_products(Vec::new());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unavailable_flags_and_recovery() {
        let hub = SnapshotHub::new();
        hub.replace_sales(vec![sale("CEMENT", 5.0)]);

        hub.mark_unavailable(RecordSet::Sales);
        assert!(!hub.is_available(RecordSet::Sales));
        assert!(hub.any_unavailable());
        // Held snapshot stays readable while unavailable.
        assert_eq!(hub.sales().len(), 1);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_listener = calls.clone();
        let _sub = hub.subscribe(move |_| {
            calls_in_listener.fetch_add(1, Ordering::SeqCst);
        });

        hub.mark_available(RecordSet::Sales);
        assert!(hub.is_available(RecordSet::Sales));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // A second mark_available is a no-op.
        hub.mark_available(RecordSet::Sales);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn redelivery_clears_the_unavailable_flag() {
        let hub = SnapshotHub::new();
        hub.mark_unavailable(RecordSet::Purchases);
        hub.replace_purchases(Vec::new());
        assert!(hub.is_available(RecordSet::Purchases));
    }
}
