// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Resolver settings. Field names follow the extension's settings keys (camelCase in JSON).

use crate::artifacts::ArtifactExtensions;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_BINARY_EXTENSION: &str = ".elf";
pub const DEFAULT_MAP_EXTENSION: &str = ".map";

/// Conventional build output folders, searched in this order before falling back to the
/// whole workspace.
pub const DEFAULT_SEARCH_FOLDERS: &[&str] = &[
    "build",
    "Debug",
    "Release",
    "out",
    "output",
    "bin",
    "_build",
    "cmake-build-debug",
    "cmake-build-release",
    "obj",
    "dist",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Explicit map file; used only together with `binary_file_path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_file_path: Option<String>,
    /// Toolchain installation; validated on its own and never fails a resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolchain_path: Option<String>,
    /// Verbose logging only, never changes what gets resolved
    pub debug: bool,
    pub binary_extension: String,
    pub map_extension: String,
    pub search_folders: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            map_file_path: None,
            binary_file_path: None,
            toolchain_path: None,
            debug: false,
            binary_extension: DEFAULT_BINARY_EXTENSION.to_string(),
            map_extension: DEFAULT_MAP_EXTENSION.to_string(),
            search_folders: DEFAULT_SEARCH_FOLDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// Editor settings store "unset" as an empty string
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ResolverConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn binary_override(&self) -> Option<&str> {
        non_empty(&self.binary_file_path)
    }

    pub fn map_override(&self) -> Option<&str> {
        non_empty(&self.map_file_path)
    }

    pub fn toolchain_override(&self) -> Option<&str> {
        non_empty(&self.toolchain_path)
    }

    pub fn extensions(&self) -> ArtifactExtensions {
        ArtifactExtensions::new(self.binary_extension.clone(), self.map_extension.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_camel_case_settings_with_defaults() {
        let cfg: ResolverConfig = serde_json::from_str(
            r#"{ "mapFilePath": "build/app.map", "toolchainPath": "/opt/gcc-arm", "debug": true }"#,
        )
        .unwrap();

        assert_eq!(cfg.map_override(), Some("build/app.map"));
        assert_eq!(cfg.binary_override(), None);
        assert_eq!(cfg.toolchain_override(), Some("/opt/gcc-arm"));
        assert!(cfg.debug);
        assert_eq!(cfg.extensions(), ArtifactExtensions::default());
        assert_eq!(cfg.search_folders.first().map(String::as_str), Some("build"));
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let cfg: ResolverConfig =
            serde_json::from_str(r#"{ "binaryFilePath": "", "mapFilePath": "   " }"#).unwrap();
        assert_eq!(cfg.binary_override(), None);
        assert_eq!(cfg.map_override(), None);
    }

    #[test]
    fn serializes_back_to_settings_keys() {
        let cfg = ResolverConfig {
            binary_file_path: Some("fw.elf".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["binaryFilePath"], "fw.elf");
        assert_eq!(v["binaryExtension"], ".elf");
        assert!(v.get("mapFilePath").is_none());
    }

    #[test]
    fn from_file_reports_missing_and_malformed_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("settings.json");
        assert!(matches!(
            ResolverConfig::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        std::fs::write(&missing, "{ not json").unwrap();
        assert!(matches!(
            ResolverConfig::from_file(&missing),
            Err(ConfigError::Parse { .. })
        ));

        std::fs::write(&missing, r#"{ "mapExtension": ".lst" }"#).unwrap();
        let cfg = ResolverConfig::from_file(&missing).unwrap();
        assert_eq!(cfg.map_extension, ".lst");
    }
}
