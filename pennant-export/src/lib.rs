//! Event Export for Pennant
//!
//! Records flag evaluations as [`FeatureEvent`]s and hands them to an
//! [`Exporter`] sink. Exporters batch-write and report failure; retries and
//! delivery guarantees are the caller's concern.
//!
//! # Quick Start
//!
//! ```
//! use pennant_export::{Exporter, FeatureEvent, MemoryExporter};
//!
//! # tokio_test::block_on(async {
//! let exporter = MemoryExporter::new();
//!
//! let event = FeatureEvent::new("new-ui", "user-123", true).variation("enabled");
//! exporter.export(&[event]).await.unwrap();
//!
//! assert_eq!(exporter.exported().await.len(), 1);
//! # });
//! ```
//!
//! # File Export
//!
//! ```no_run
//! use pennant_export::{ExportFormat, Exporter, FeatureEvent, FileExporter};
//!
//! # tokio_test::block_on(async {
//! let exporter = FileExporter::new("/var/log/flags").format(ExportFormat::Csv);
//! let batch = vec![FeatureEvent::new("new-ui", "user-123", true)];
//! exporter.export(&batch).await.unwrap();
//! # });
//! ```

pub mod event;
pub mod exporter;
pub mod file;

pub use event::FeatureEvent;
pub use exporter::{ExportError, Exporter, LogExporter, MemoryExporter};
pub use file::{ExportFormat, FileExporter, DEFAULT_FILENAME_TEMPLATE};
