// ============================================================================
// Order Domain - Pricing, validation and submission of catering orders
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (SelectedItem, DeliveryDay)
// - Commands (SubmitOrder, the untrusted client payload)
// - Errors (ValidationError, ValidationErrors)
// - Pricing (PricingPolicy, PriceBreakdown)
// - Validation (OrderValidator, ValidatedOrder)
// - Aggregate (Order, NewOrder)
// - Submission (SubmissionService)
//
// ============================================================================

pub mod value_objects;
pub mod commands;
pub mod errors;
pub mod pricing;
pub mod validation;
pub mod aggregate;
pub mod submission;

// Re-export for convenience
pub use value_objects::*;
pub use commands::*;
pub use errors::*;
pub use pricing::*;
pub use validation::*;
pub use aggregate::*;
pub use submission::*;
