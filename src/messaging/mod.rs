mod webhook;

pub use webhook::{RelayError, WebhookClient};
