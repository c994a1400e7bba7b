//! Notifier and navigator implementations backed by tracing.

use std::sync::Mutex;

use hub_core::navigation::{Navigator, Route};
use hub_core::notification::{Notification, NotificationVariant, Notifier};
use tracing::{info, warn};

/// Emits notifications as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => info!(
                title = %notification.title,
                "[Notification] {}",
                notification.description
            ),
            NotificationVariant::Destructive => warn!(
                title = %notification.title,
                "[Notification] {}",
                notification.description
            ),
        }
    }
}

/// Remembers the last requested route.
#[derive(Debug, Default)]
pub struct TrackingNavigator {
    current: Mutex<Option<Route>>,
}

impl TrackingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for TrackingNavigator {
    fn navigate(&self, route: Route) {
        info!("[Navigator] -> {}", route);
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(route);
    }
}
