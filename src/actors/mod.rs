// ============================================================================
// Actors Module
// ============================================================================
//
// Actors are reserved for work that must run detached from the request path.
// Today that is only the webhook relay.
//
// ============================================================================

mod notification_relay;

pub use notification_relay::{NotificationRelay, NotifyOrder};
