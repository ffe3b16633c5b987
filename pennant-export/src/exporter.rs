//! Exporter contract and in-process exporters.

use crate::FeatureEvent;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Sink for evaluation events.
///
/// Exporters write a batch and report failure; the caller decides whether to
/// retry, there are no delivery guarantees in the contract.
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Whether this exporter wants events batched before delivery. Non-bulk
    /// exporters are fed each event as it happens.
    fn is_bulk(&self) -> bool {
        true
    }

    /// Write a batch of events to the sink.
    async fn export(&self, events: &[FeatureEvent]) -> Result<(), ExportError>;
}

/// Export failures.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid exporter configuration: {0}")]
    Configuration(String),
}

/// Memory exporter for testing.
///
/// Stores exported events in memory for later inspection.
#[derive(Clone, Default)]
pub struct MemoryExporter {
    events: Arc<Mutex<Vec<FeatureEvent>>>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events exported so far.
    pub async fn exported(&self) -> Vec<FeatureEvent> {
        self.events.lock().await.clone()
    }

    /// Drop all stored events.
    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

#[async_trait]
impl Exporter for MemoryExporter {
    fn is_bulk(&self) -> bool {
        false
    }

    async fn export(&self, events: &[FeatureEvent]) -> Result<(), ExportError> {
        self.events.lock().await.extend_from_slice(events);
        Ok(())
    }
}

/// Log exporter for development.
///
/// Emits each event as a structured `tracing` record instead of persisting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogExporter;

impl LogExporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Exporter for LogExporter {
    fn is_bulk(&self) -> bool {
        false
    }

    async fn export(&self, events: &[FeatureEvent]) -> Result<(), ExportError> {
        for event in events {
            tracing::info!(
                flag = %event.key,
                user = %event.user_key,
                variation = %event.variation,
                value = %event.value,
                default = event.default,
                "flag evaluated"
            );
        }
        Ok(())
    }
}
