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

use std::path::PathBuf;

use serde::Serialize;

/// The pair of file name suffixes that identify a binary image and its linker map.
/// Matching is a case-sensitive suffix test on the file name, so the leading dot is
/// part of the suffix (".elf", not "elf").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactExtensions {
    pub binary: String,
    pub map: String,
}

impl ArtifactExtensions {
    pub fn new(binary: impl Into<String>, map: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            map: map.into(),
        }
    }

    /// Stem of a binary file name. `None` for other files and for a bare ".elf".
    pub fn binary_stem<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        file_name
            .strip_suffix(self.binary.as_str())
            .filter(|stem| !stem.is_empty())
    }

    pub fn map_stem<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        file_name
            .strip_suffix(self.map.as_str())
            .filter(|stem| !stem.is_empty())
    }

    pub fn is_binary(&self, file_name: &str) -> bool {
        self.binary_stem(file_name).is_some()
    }

    pub fn is_map(&self, file_name: &str) -> bool {
        self.map_stem(file_name).is_some()
    }
}

impl Default for ArtifactExtensions {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_BINARY_EXTENSION,
            crate::config::DEFAULT_MAP_EXTENSION,
        )
    }
}

/// One viable binary/map pairing found during a search, before selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Stem shared by the binary and map, e.g. "firmware" for firmware.elf/firmware.map
    pub display_label: String,
    /// Folder holding both files, relative to the workspace root ("." for the root itself)
    pub relative_folder: String,
    pub binary_path: PathBuf,
    pub map_path: PathBuf,
}

impl Candidate {
    pub fn new(
        stem: impl Into<String>,
        relative_folder: impl Into<String>,
        binary_path: PathBuf,
        map_path: PathBuf,
    ) -> Self {
        Self {
            display_label: stem.into(),
            relative_folder: relative_folder.into(),
            binary_path,
            map_path,
        }
    }
}

/// The outcome of one resolution: what the analyzer should load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPaths {
    pub map_path: PathBuf,
    pub binary_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolchain_path: Option<PathBuf>,
}
