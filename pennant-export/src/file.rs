//! File exporter.

use crate::{ExportError, Exporter, FeatureEvent};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Output format for exported event files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// One semicolon-separated row per event, no header.
    Csv,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Default filename template for exported batches.
pub const DEFAULT_FILENAME_TEMPLATE: &str =
    "flag-variation-{{ .Hostname}}-{{ .Timestamp}}.{{ .Format}}";

/// Writes each event batch to a file in an output directory.
///
/// Filenames come from a template with `{{ .Hostname}}`, `{{ .Timestamp}}`
/// and `{{ .Format}}` placeholders, so batches from different hosts and
/// instants land in distinct files that downstream collectors can pick up.
pub struct FileExporter {
    output_dir: PathBuf,
    format: ExportFormat,
    filename_template: String,
}

impl FileExporter {
    /// A JSON file exporter writing into `output_dir`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pennant_export::{ExportFormat, FileExporter};
    ///
    /// let exporter = FileExporter::new("/var/log/flags").format(ExportFormat::Csv);
    /// ```
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: ExportFormat::default(),
            filename_template: DEFAULT_FILENAME_TEMPLATE.to_string(),
        }
    }

    /// Set the output format.
    pub fn format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the filename template.
    pub fn filename_template(mut self, template: impl Into<String>) -> Self {
        self.filename_template = template.into();
        self
    }

    fn render_filename(&self, now: DateTime<Utc>) -> String {
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "unknown".to_string());
        let timestamp = now.timestamp().to_string();

        let mut name = self.filename_template.clone();
        for (token, value) in [
            ("Hostname", host.as_str()),
            ("Timestamp", timestamp.as_str()),
            ("Format", self.format.extension()),
        ] {
            // Both spacings seen in the wild: "{{ .Token}}" and "{{ .Token }}".
            name = name.replace(&format!("{{{{ .{token}}}}}"), value);
            name = name.replace(&format!("{{{{ .{token} }}}}"), value);
        }
        name
    }

    fn render_batch(&self, events: &[FeatureEvent]) -> Result<String, ExportError> {
        let mut contents = String::new();
        for event in events {
            match self.format {
                ExportFormat::Json => contents.push_str(&event.to_json()?),
                ExportFormat::Csv => contents.push_str(&event.csv_line()),
            }
            contents.push('\n');
        }
        Ok(contents)
    }
}

#[async_trait]
impl Exporter for FileExporter {
    async fn export(&self, events: &[FeatureEvent]) -> Result<(), ExportError> {
        if events.is_empty() {
            return Ok(());
        }

        let contents = self.render_batch(events)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(self.render_filename(Utc::now()));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(
            path = %path.display(),
            events = events.len(),
            "exported feature events"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_filename_replaces_tokens() {
        let exporter = FileExporter::new("/tmp/out").format(ExportFormat::Csv);
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let name = exporter.render_filename(at);
        assert!(name.starts_with("flag-variation-"));
        assert!(name.contains("-1704067200"));
        assert!(name.ends_with(".csv"));
        assert!(!name.contains("{{"));
    }

    #[test]
    fn test_render_filename_custom_template() {
        let exporter =
            FileExporter::new("/tmp/out").filename_template("events-{{ .Timestamp }}.{{ .Format }}");
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(exporter.render_filename(at), "events-1704067200.json");
    }

    #[test]
    fn test_render_batch_json_lines() {
        let exporter = FileExporter::new("/tmp/out");
        let events = vec![
            FeatureEvent::new("f", "u1", true),
            FeatureEvent::new("f", "u2", false),
        ];

        let contents = exporter.render_batch(&events).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: FeatureEvent = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.key, "f");
        }
    }
}
