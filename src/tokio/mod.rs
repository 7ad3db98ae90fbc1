//! Support for awaiting facade events on Tokio.

mod subscription;

pub use subscription::EventSubscription;
