use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Receives human-readable events about data the user did not author.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Holds at most one message for a fixed display duration.
/// A new message replaces an unexpired one instead of queuing behind it.
pub struct NotificationBoard {
    ttl: Duration,
    current: Mutex<Option<(String, Instant)>>,
}

impl NotificationBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            current: Mutex::new(None),
        }
    }

    pub fn current(&self) -> Option<String> {
        let mut guard = self.current.lock().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            Some((message, posted)) if posted.elapsed() < self.ttl => Some(message.clone()),
            Some(_) => {
                *guard = None;
                None
            }
            None => None,
        }
    }
}

impl Default for NotificationBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl Notifier for NotificationBoard {
    fn notify(&self, message: &str) {
        log::info!("🔔 {}", message);
        let mut guard = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some((message.to_string(), Instant::now()));
    }
}
