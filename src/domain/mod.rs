// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Order rules live here, free of HTTP and storage details. The catalog is
// consumed read-only from `crate::catalog`.
//
// ============================================================================

pub mod order;
