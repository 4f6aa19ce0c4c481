//! Persisted configuration models for the WPS service.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ServiceInfo;

/// Identifier of the WPS service, fixed at creation.
pub const WPS_SERVICE_ID: &str = "wps";

/// Protocol version seeded into an empty `versions` list.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Connection timeout (seconds) used when the persisted value is `0`.
pub const DEFAULT_CONNECTION_TIMEOUT: i64 = 30;

/// Free-form key/value map used for service metadata and client properties.
pub type MetadataMap = BTreeMap<String, serde_json::Value>;

/// Namespaced name of a typed entity, e.g. a process exposed by a factory.
///
/// Persisted as a single string through [`crate::QualifiedNameConverter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    namespace: String,
    local_part: String,
}

impl QualifiedName {
    #[must_use]
    pub fn new(namespace: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_part: local_part.into(),
        }
    }

    /// Name without a namespace.
    #[must_use]
    pub fn local(local_part: impl Into<String>) -> Self {
        Self::new(String::new(), local_part)
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }
}

/// Service protocol version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

const fn default_enabled() -> bool {
    true
}

/// Configuration entry mirroring one discovered process factory.
///
/// Created by discovery only when the service has no process groups at all.
/// Once persisted the entry belongs to configuration storage and may be
/// toggled by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessGroupInfo {
    /// Fully-qualified type name of the process factory implementation.
    pub factory_class: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Processes of this factory that were disabled individually.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filtered_processes: Vec<QualifiedName>,
}

impl ProcessGroupInfo {
    /// Creates an enabled group for the given factory type name.
    #[must_use]
    pub fn new(factory_class: impl Into<String>) -> Self {
        Self {
            factory_class: factory_class.into(),
            enabled: true,
            filtered_processes: Vec::new(),
        }
    }
}

/// Persisted configuration of the WPS service.
///
/// Collection fields are `Option` because absence and emptiness mean
/// different things: an absent `process_groups` is filled by discovery on
/// load, an empty one is kept as the operator left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WpsInfo {
    pub id: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_resource: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_base_url: Option<String>,

    #[serde(default)]
    pub cite_compliant: bool,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_formats: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_properties: Option<MetadataMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<Version>>,

    /// Seconds; `0` means "not configured".
    #[serde(default)]
    pub connection_timeout: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_groups: Option<Vec<ProcessGroupInfo>>,
}

impl WpsInfo {
    /// Creates an enabled service with every optional field absent.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            name: None,
            title: None,
            abstract_text: None,
            maintainer: None,
            online_resource: None,
            schema_base_url: None,
            cite_compliant: false,
            verbose: false,
            keywords: None,
            exception_formats: None,
            metadata: None,
            client_properties: None,
            versions: None,
            connection_timeout: 0,
            process_groups: None,
        }
    }
}

impl ServiceInfo for WpsInfo {
    fn id(&self) -> &str {
        &self.id
    }

    fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        self.keywords = Some(keywords);
    }

    fn exception_formats(&self) -> Option<&[String]> {
        self.exception_formats.as_deref()
    }

    fn set_exception_formats(&mut self, formats: Vec<String>) {
        self.exception_formats = Some(formats);
    }

    fn metadata(&self) -> Option<&MetadataMap> {
        self.metadata.as_ref()
    }

    fn set_metadata(&mut self, metadata: MetadataMap) {
        self.metadata = Some(metadata);
    }

    fn client_properties(&self) -> Option<&MetadataMap> {
        self.client_properties.as_ref()
    }

    fn set_client_properties(&mut self, properties: MetadataMap) {
        self.client_properties = Some(properties);
    }

    fn versions(&self) -> Option<&[Version]> {
        self.versions.as_deref()
    }

    fn set_versions(&mut self, versions: Vec<Version>) {
        self.versions = Some(versions);
    }

    fn connection_timeout(&self) -> i64 {
        self.connection_timeout
    }

    fn set_connection_timeout(&mut self, timeout: i64) {
        self.connection_timeout = timeout;
    }

    fn process_groups(&self) -> Option<&[ProcessGroupInfo]> {
        self.process_groups.as_deref()
    }

    fn set_process_groups(&mut self, groups: Vec<ProcessGroupInfo>) {
        self.process_groups = Some(groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_has_absent_collections() {
        let wps = WpsInfo::new(WPS_SERVICE_ID);
        assert_eq!(wps.id(), "wps");
        assert!(wps.enabled);
        assert!(wps.keywords().is_none());
        assert!(wps.versions().is_none());
        assert!(wps.process_groups().is_none());
        assert_eq!(wps.connection_timeout(), 0);
    }

    #[test]
    fn test_process_group_defaults_to_enabled() {
        let group = ProcessGroupInfo::new("org.example.BufferFactory");
        assert!(group.enabled);
        assert!(group.filtered_processes.is_empty());
    }

    #[test]
    fn test_absent_and_empty_process_groups_serialize_differently() {
        let absent = WpsInfo::new(WPS_SERVICE_ID);
        let json = serde_json::to_value(&absent).unwrap();
        assert!(json.get("processGroups").is_none());

        let mut empty = WpsInfo::new(WPS_SERVICE_ID);
        empty.set_process_groups(Vec::new());
        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["processGroups"], serde_json::json!([]));

        let back: WpsInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back.process_groups(), Some(&[][..]));
    }

    #[test]
    fn test_deserialize_camel_case_document() {
        let json = serde_json::json!({
            "id": "wps",
            "abstract": "Processing service",
            "connectionTimeout": -5,
            "exceptionFormats": ["text/xml"],
            "versions": ["2.0.0"],
            "processGroups": [
                { "factoryClass": "a.Impl", "enabled": false, "filteredProcesses": ["gs:Buffer"] }
            ]
        });

        let wps: WpsInfo = serde_json::from_value(json).unwrap();
        assert!(wps.enabled);
        assert_eq!(wps.abstract_text.as_deref(), Some("Processing service"));
        assert_eq!(wps.connection_timeout, -5);
        assert_eq!(wps.versions(), Some(&[Version::new("2.0.0")][..]));

        let groups = wps.process_groups().unwrap();
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].enabled);
        assert_eq!(
            groups[0].filtered_processes,
            vec![QualifiedName::new("gs", "Buffer")]
        );
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::from(DEFAULT_VERSION).to_string(), "1.0.0");
    }
}
