//! Session lifecycle events.

use serde::{Deserialize, Serialize};

use range_core::SessionStatistics;

/// High-level session events published alongside the per-shot weapon
/// events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A firing session started with the given replay seed.
    Started { seed: u64 },

    /// The session ran its batch to exhaustion.
    Completed { stats: SessionStatistics },

    /// The session aborted before exhausting its batch.
    Failed { message: String },
}
