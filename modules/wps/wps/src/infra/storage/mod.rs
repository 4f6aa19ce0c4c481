//! YAML storage of the WPS service document.
//!
//! The document has a single root key naming the service:
//!
//! ```yaml
//! wps:
//!   id: wps
//!   connectionTimeout: 30
//!   processGroups:
//!     - factoryClass: org.example.BufferFactory
//!       enabled: true
//!       filteredProcesses: ["gs:Buffer"]
//! ```
//!
//! Absent optional fields are omitted, so a field that was never set stays
//! absent after a round trip while an empty list stays an empty list.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wps_sdk::{WpsError, WpsInfo};

#[derive(Debug, Serialize, Deserialize)]
struct WpsDocument<T> {
    wps: T,
}

/// Reads and writes the service document at a fixed path.
#[derive(Debug, Clone)]
pub struct ServicePersister {
    path: PathBuf,
}

impl ServicePersister {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the document, returning `None` when the file does not exist.
    ///
    /// # Errors
    /// Returns `WpsError::Persistence` if the file cannot be read and
    /// `WpsError::MalformedDocument` if it cannot be parsed.
    pub fn read(&self) -> Result<Option<WpsInfo>, WpsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "service document not found");
                return Ok(None);
            }
            Err(e) => {
                return Err(WpsError::persistence(format!(
                    "{}: {e}",
                    self.path.display()
                )));
            }
        };

        let document: WpsDocument<WpsInfo> = serde_saphyr::from_str(&raw).map_err(|e| {
            WpsError::malformed_document(format!("{}: {e}", self.path.display()))
        })?;
        Ok(Some(document.wps))
    }

    /// Writes the document, creating the parent directory if needed.
    ///
    /// The content is written to a sibling temporary file first and then
    /// renamed over the target.
    ///
    /// # Errors
    /// Returns `WpsError::Internal` if the service cannot be serialized and
    /// `WpsError::Persistence` if the file cannot be written.
    pub fn write(&self, service: &WpsInfo) -> Result<(), WpsError> {
        let document = WpsDocument { wps: service };
        let yaml = serde_saphyr::to_string(&document)
            .map_err(|e| WpsError::internal(format!("failed to serialize service: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(&e))?;
        }

        let tmp = self.path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml).map_err(|e| self.io_error(&e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(&e))?;

        info!(path = %self.path.display(), service = %service.id, "service document saved");
        Ok(())
    }

    fn io_error(&self, e: &std::io::Error) -> WpsError {
        WpsError::persistence(format!("{}: {e}", self.path.display()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use wps_sdk::{MetadataMap, ProcessGroupInfo, QualifiedName, Version};

    fn persister_in(dir: &tempfile::TempDir) -> ServicePersister {
        ServicePersister::new(dir.path().join("wps.yaml"))
    }

    #[test]
    fn test_read_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let persister = persister_in(&dir);

        assert!(!persister.exists());
        assert!(persister.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_preserves_service() {
        let dir = tempfile::tempdir().unwrap();
        let persister = persister_in(&dir);

        let mut wps = WpsInfo::new("wps");
        wps.title = Some("Processing".to_owned());
        wps.keywords = Some(vec!["WPS".to_owned(), "processing".to_owned()]);
        wps.metadata = Some(MetadataMap::from([(
            "limit".to_owned(),
            serde_json::json!(10),
        )]));
        wps.versions = Some(vec![Version::new("1.0.0")]);
        wps.connection_timeout = 45;
        wps.process_groups = Some(vec![ProcessGroupInfo {
            factory_class: "org.example.BufferFactory".to_owned(),
            enabled: false,
            filtered_processes: vec![QualifiedName::new("gs", "Buffer")],
        }]);

        persister.write(&wps).unwrap();
        let loaded = persister.read().unwrap().unwrap();

        assert_eq!(loaded, wps);
    }

    #[test]
    fn test_empty_and_absent_process_groups_survive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let persister = persister_in(&dir);

        let mut wps = WpsInfo::new("wps");
        wps.process_groups = Some(Vec::new());
        persister.write(&wps).unwrap();
        let loaded = persister.read().unwrap().unwrap();
        assert_eq!(loaded.process_groups, Some(Vec::new()));

        let wps = WpsInfo::new("wps");
        persister.write(&wps).unwrap();
        let loaded = persister.read().unwrap().unwrap();
        assert!(loaded.process_groups.is_none());
        assert!(loaded.keywords.is_none());
    }

    #[test]
    fn test_read_hand_written_document() {
        let dir = tempfile::tempdir().unwrap();
        let persister = persister_in(&dir);
        fs::write(
            persister.path(),
            r#"
wps:
  id: wps
  connectionTimeout: 0
  versions: []
  processGroups:
    - factoryClass: a.Impl
      filteredProcesses: ["gs:Buffer", "Clip"]
"#,
        )
        .unwrap();

        let wps = persister.read().unwrap().unwrap();

        assert_eq!(wps.versions, Some(Vec::new()));
        let groups = wps.process_groups.unwrap();
        assert!(groups[0].enabled);
        assert_eq!(
            groups[0].filtered_processes,
            vec![QualifiedName::new("gs", "Buffer"), QualifiedName::local("Clip")]
        );
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let persister = ServicePersister::new(dir.path().join("nested").join("wps.yaml"));

        persister.write(&WpsInfo::new("wps")).unwrap();

        assert!(persister.exists());
        assert!(!dir.path().join("nested").join("wps.yaml.tmp").exists());
    }

    #[test]
    fn test_malformed_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let persister = persister_in(&dir);
        fs::write(persister.path(), "wps: [not, a, mapping]\n").unwrap();

        let err = persister.read().unwrap_err();

        assert!(err.is_malformed_document(), "unexpected error: {err}");
    }
}
