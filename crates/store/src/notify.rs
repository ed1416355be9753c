use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Outcome of a write operation, phrased for direct display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

// Fan-out channel for operation outcomes, the store-side half of the toast
// banners the UI shows. Subscribers that fall behind or disappear never
// block an operation.
#[derive(Debug)]
pub(crate) struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn success(&self, message: impl Into<String>) {
        let _ = self.tx.send(Notification {
            severity: Severity::Success,
            message: message.into(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let _ = self.tx.send(Notification {
            severity: Severity::Error,
            message: message.into(),
        });
    }
}
