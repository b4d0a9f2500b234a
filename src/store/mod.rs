// ============================================================================
// Storage
// ============================================================================
//
// Order persistence behind the `OrderStore` trait. The in-memory store is the
// only backend; it is built once in main and handed to the submission
// service.
//
// ============================================================================

mod order_store;

pub use order_store::{InMemoryOrderStore, OrderStore, StoreError};
