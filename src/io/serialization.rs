// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project snapshot serialization and deserialization.
//!
//! A snapshot is the full project list, written as JSON or YAML when the
//! user asks for it. The store itself keeps nothing on disk.

use crate::error::FormatError;
use crate::models::Project;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a project snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub projects: Vec<Project>,
}

/// Snapshot file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            other => Err(FormatError::UnsupportedExtension(other.map(str::to_string))),
        }
    }
}

impl Snapshot {
    /// Render in the given format. JSON is pretty-printed for hand editing.
    pub fn encode(&self, format: Format) -> Result<String> {
        let text = match format {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }

    pub fn decode(text: &str, format: Format) -> Result<Self> {
        let snapshot = match format {
            Format::Yaml => serde_yaml::from_str(text)?,
            Format::Json => serde_json::from_str(text)?,
        };
        Ok(snapshot)
    }
}

/// Write a snapshot in whichever format the file extension names.
pub fn export_path(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let format = Format::from_path(path).inspect_err(|e| log::error!("{}", e))?;
    std::fs::write(path, snapshot.encode(format)?)
        .with_context(|| format!("writing snapshot {}", path.display()))?;
    log::info!(
        "Exported {} projects to {}",
        snapshot.projects.len(),
        path.display()
    );
    Ok(())
}

/// Read a snapshot in whichever format the file extension names.
pub fn import_path(path: &Path) -> Result<Snapshot> {
    let format = Format::from_path(path).inspect_err(|e| log::error!("{}", e))?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let snapshot = Snapshot::decode(&text, format)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    log::info!(
        "Imported {} projects from {}",
        snapshot.projects.len(),
        path.display()
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_projects;

    fn snapshot() -> Snapshot {
        Snapshot {
            projects: sample_projects(),
        }
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        export_path(&snapshot(), &path).unwrap();
        assert_eq!(import_path(&path).unwrap(), snapshot());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.yml");

        export_path(&snapshot(), &path).unwrap();
        assert_eq!(import_path(&path).unwrap(), snapshot());
    }

    #[test]
    fn test_yaml_text_uses_wire_names() {
        let text = snapshot().encode(Format::Yaml).unwrap();
        assert!(text.contains("videoUrl:"));
        assert!(text.contains("startTime:"));
        assert_eq!(Snapshot::decode(&text, Format::Yaml).unwrap(), snapshot());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"projects\": [").unwrap();

        let err = import_path(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = Path::new("projects.txt");
        let err = export_path(&snapshot(), path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FormatError>(),
            Some(&FormatError::UnsupportedExtension(Some("txt".to_string())))
        );
        assert!(Format::from_path(Path::new("projects")).is_err());
    }

    #[test]
    fn test_import_reads_camel_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hand.json");
        std::fs::write(
            &path,
            r#"{"projects":[{"id":"p","name":"N","description":"D","videoUrl":"v","thumbnail":"t",
                "created":"2023-07-15T00:00:00Z","updated":"2023-07-18T00:00:00Z",
                "ctas":[{"id":"c","type":"banner","text":"Hi","position":{"x":10,"y":20},
                "style":{"color":"white"},"animation":"slide","link":"l","startTime":1,"endTime":2}]}]}"#,
        )
        .unwrap();

        let snapshot = import_path(&path).unwrap();
        let cta = &snapshot.projects[0].ctas[0];
        assert_eq!(cta.cta_type, crate::models::CtaType::Banner);
        assert_eq!(cta.end_time, 2.0);
        assert_eq!(cta.style["color"], "white");
    }
}
