//! # Order Repository
//!
//! Operations on the order collection.
//!
//! Orders reference users and products by ID only. Nothing here checks
//! that those IDs resolve, and deleting a product or user leaves existing
//! orders untouched.

use std::sync::Arc;
use tracing::{debug, info};

use crate::collection::Collection;
use menagerie_core::{EntityId, Order, OrderCreate, OrderUpdate};

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    orders: Arc<Collection<Order>>,
}

impl OrderRepository {
    pub(crate) fn new(orders: Arc<Collection<Order>>) -> Self {
        OrderRepository { orders }
    }

    /// Lists all orders in insertion order.
    pub fn list(&self) -> Vec<Order> {
        let orders = self.orders.list();
        debug!(count = orders.len(), "Listed orders");
        orders
    }

    /// Gets an order by its ID.
    pub fn get_by_id(&self, id: EntityId) -> Option<Order> {
        debug!(id, "Getting order");
        self.orders.get(id)
    }

    /// Places an order. Date, status and product IDs are stored as given.
    pub fn add(&self, input: OrderCreate) -> Order {
        let order = self.orders.insert_with(|id| Order::from_create(id, input));
        debug!(
            id = order.id,
            user_id = order.user_id,
            products = order.product_ids.len(),
            "Order added"
        );
        order
    }

    /// Overwrites every field of an existing order except its ID.
    pub fn update(&self, update: OrderUpdate) -> Option<Order> {
        let id = update.id;
        let updated = self.orders.modify(id, |order| {
            order.apply_update(update);
            order.clone()
        });
        debug!(id, found = updated.is_some(), "Order update");
        updated
    }

    /// Deletes an order. Returns whether one was removed.
    pub fn delete(&self, id: EntityId) -> bool {
        let removed = self.orders.remove(id);
        if removed {
            info!(id, "Order deleted");
        } else {
            debug!(id, "Order delete: nothing to remove");
        }
        removed
    }

    /// Number of orders currently stored.
    pub fn count(&self) -> usize {
        self.orders.len()
    }

    /// Cancels an order, whatever its current status.
    ///
    /// ## Returns
    /// * `Some(Order)` - The order, now with status `"cancelled"`
    /// * `None` - No order with that ID
    ///
    /// Cancelling an already cancelled order succeeds again.
    pub fn cancel(&self, id: EntityId) -> Option<Order> {
        let cancelled = self.orders.modify(id, |order| {
            order.cancel();
            order.clone()
        });

        match &cancelled {
            Some(_) => info!(id, "Order cancelled"),
            None => debug!(id, "Order cancel: not found"),
        }
        cancelled
    }

    /// All orders placed by `user_id`, in insertion order.
    pub fn by_user(&self, user_id: EntityId) -> Vec<Order> {
        let orders = self.orders.find(|order| order.user_id == user_id);
        debug!(user_id, count = orders.len(), "Orders by user");
        orders
    }

    /// All orders whose status equals `status`, ignoring case.
    ///
    /// A blank status matches nothing; the collection is not scanned.
    pub fn by_status(&self, status: &str) -> Vec<Order> {
        if status.trim().is_empty() {
            debug!("Orders by status: blank status");
            return Vec::new();
        }

        let orders = self.orders.find(|order| order.has_status(status));
        debug!(status, count = orders.len(), "Orders by status");
        orders
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::Store;
    use chrono::Utc;
    use menagerie_core::{
        OrderCreate, OrderUpdate, PaymentMethod, ShippingMethod, ORDER_STATUS_CANCELLED,
    };

    fn new_order(user_id: i64, status: &str) -> OrderCreate {
        OrderCreate {
            user_id,
            order_date: Utc::now(),
            status: status.to_string(),
            payment_method: PaymentMethod::Transfer,
            shipping_method: ShippingMethod::ParcelLocker,
            product_ids: vec![1, 1, 2],
        }
    }

    #[test]
    fn test_cancel_scenario() {
        let store = Store::seeded();
        let orders = store.orders();

        assert!(orders.cancel(999).is_none());

        let cancelled = orders.cancel(1).unwrap();
        assert_eq!(cancelled.status, ORDER_STATUS_CANCELLED);
        assert_eq!(orders.get_by_id(1).unwrap().status, "cancelled");

        // repeatable
        assert_eq!(orders.cancel(1).unwrap().status, "cancelled");
    }

    #[test]
    fn test_cancel_completed_order() {
        let store = Store::seeded();
        assert!(store.orders().cancel(2).unwrap().is_cancelled());
    }

    #[test]
    fn test_add_stores_fields_as_given() {
        let store = Store::seeded();
        // user 42 does not exist; orders do not check references
        let order = store.orders().add(new_order(42, "NEW"));

        assert_eq!(order.id, 3);
        assert_eq!(order.status, "NEW");
        assert_eq!(order.product_ids, [1, 1, 2]);
        assert_eq!(store.orders().by_user(42), vec![order]);
    }

    #[test]
    fn test_by_user() {
        let store = Store::seeded();
        store.orders().add(new_order(1, "processing"));

        let ids: Vec<_> = store.orders().by_user(1).iter().map(|o| o.id).collect();
        assert_eq!(ids, [1, 3]);
        assert!(store.orders().by_user(7).is_empty());
    }

    #[test]
    fn test_by_status_ignores_case() {
        let store = Store::seeded();
        let found = store.orders().by_status("PROCESSING");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_by_status_blank_is_empty() {
        let store = Store::seeded();
        assert!(store.orders().by_status("").is_empty());
        assert!(store.orders().by_status("   ").is_empty());
    }

    #[test]
    fn test_by_status_does_not_trim() {
        let store = Store::seeded();
        assert!(store.orders().by_status(" completed").is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let store = Store::seeded();
        let original = store.orders().get_by_id(2).unwrap();

        let updated = store
            .orders()
            .update(OrderUpdate {
                id: 2,
                user_id: original.user_id,
                order_date: original.order_date,
                status: "shipped".to_string(),
                payment_method: original.payment_method,
                shipping_method: ShippingMethod::Courier,
                product_ids: vec![],
            })
            .unwrap();
        assert_eq!(updated.status, "shipped");
        assert!(updated.product_ids.is_empty());

        assert!(store.orders().delete(2));
        assert!(!store.orders().delete(2));
        assert_eq!(store.orders().count(), 1);
    }

    #[test]
    fn test_product_delete_keeps_order_references() {
        let store = Store::seeded();
        assert!(store.products().delete(2));
        assert_eq!(store.orders().get_by_id(1).unwrap().product_ids, [1, 2]);
    }
}
