use std::time::Duration;

use tokio::time::sleep;

/// Weight class of an operation, used to pick its simulated latency. Reads
/// are cheapest, record creation the heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpWeight {
    Read,
    Write,
    Create,
}

/// Artificial latency applied before every operation touches state, standing
/// in for the network round-trip of the API this store emulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub read: Duration,
    pub write: Duration,
    pub create: Duration,
}

impl LatencyProfile {
    /// No delay at all. The right profile for tests.
    pub const fn zero() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
            create: Duration::ZERO,
        }
    }

    /// Delays tuned for interactive use: long enough that loading states are
    /// visible, short enough not to be annoying.
    pub const fn interactive() -> Self {
        Self {
            read: Duration::from_millis(200),
            write: Duration::from_millis(300),
            create: Duration::from_millis(500),
        }
    }

    pub(crate) async fn wait(&self, weight: OpWeight) {
        let delay = match weight {
            OpWeight::Read => self.read,
            OpWeight::Write => self.write,
            OpWeight::Create => self.create,
        };
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::zero()
    }
}
