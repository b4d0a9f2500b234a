use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::order::{NewOrder, Order};

// ============================================================================
// Order Store - Append-only repository for accepted orders
// ============================================================================
//
// Responsibilities:
// 1. Assign a fresh id and creation timestamp on create
// 2. Keep orders retrievable by id and listable in insertion order
// 3. Never expose update or delete
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Order, StoreError>;

    async fn list(&self) -> Result<Vec<Order>, StoreError>;
}

#[derive(Default)]
struct Inner {
    orders: HashMap<Uuid, Order>,
    insertion_order: Vec<Uuid>,
}

/// Process-local store. Contents live only as long as the process.
#[derive(Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Inner>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        let mut inner = self.inner.write().await;

        // Id generation happens under the write lock so a collision check and
        // the insert are a single step.
        let mut id = Uuid::new_v4();
        while inner.orders.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let order = order.into_order(id, Utc::now());
        inner.orders.insert(id, order.clone());
        inner.insertion_order.push(id);

        tracing::debug!(
            order_id = %id,
            stored_orders = inner.insertion_order.len(),
            "Order stored"
        );

        Ok(order)
    }

    async fn get(&self, id: Uuid) -> Result<Order, StoreError> {
        let inner = self.inner.read().await;
        inner.orders.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let inner = self.inner.read().await;
        inner
            .insertion_order
            .iter()
            .map(|id| {
                inner
                    .orders
                    .get(id)
                    .cloned()
                    .ok_or_else(|| StoreError::Unavailable(format!("index references missing order {}", id)))
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
