//! Project export document
//!
//! A single pretty-printed JSON object:
//!
//! ```text
//! {
//!   "projects": [ ... ],
//!   "exportDate": "2024-09-29T10:30:00.000Z",
//!   "version": "2.0"
//! }
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::projects::Project;
use crate::error::{Error, Result};

/// Format version written into every export
pub const EXPORT_VERSION: &str = "2.0";

const REQUIRED_FIELDS: [&str; 3] = ["projects", "exportDate", "version"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub projects: Vec<Project>,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub export_date: String,
    pub version: String,
}

/// `projects_export_<YYYY-MM-DD>.json`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("projects_export_{}.json", date.format("%Y-%m-%d"))
}

impl ExportDocument {
    pub fn new(projects: Vec<Project>, now: DateTime<Utc>) -> Self {
        Self {
            projects,
            export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document, rejecting anything without the three top-level
    /// fields
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| Error::InvalidExport("top level is not an object".to_string()))?;

        for field in REQUIRED_FIELDS {
            if !object.contains_key(field) {
                return Err(Error::InvalidExport(format!("missing '{}' field", field)));
            }
        }

        let document: ExportDocument = serde_json::from_value(value)?;
        if document.version != EXPORT_VERSION {
            warn!(
                version = %document.version,
                expected = EXPORT_VERSION,
                "Export document has an unexpected version"
            );
        }
        Ok(document)
    }

    /// Date part of `export_date`
    pub fn export_day(&self) -> Result<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.export_date)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|e| {
                Error::InvalidExport(format!(
                    "exportDate '{}' is not a timestamp: {}",
                    self.export_date, e
                ))
            })
    }

    /// Write the document to `path`, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }
        }

        let file = File::create(path).map_err(Error::Io)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_json()?.as_bytes()).map_err(Error::Io)?;
        writer.write_all(b"\n").map_err(Error::Io)?;
        writer.flush().map_err(Error::Io)?;

        debug!(path = %path.display(), projects = self.projects.len(), "Wrote export document");
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_json(&contents)
    }

    /// Write under `dir` using the default file name for the export date
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(default_file_name(self.export_day()?));
        self.write_to(&path)?;
        info!(path = %path.display(), projects = self.projects.len(), "Exported projects");
        Ok(path)
    }
}
