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

//! Error types returned by artifact resolution and settings loading.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a single `resolve()` call. None of these are retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No workspace is open and the configured overrides did not resolve.
    #[error("No workspace folder is open and no valid binary/map file paths are configured")]
    NoWorkspace,

    /// The walk finished without a single folder containing both extensions.
    #[error("No build folder containing both {binary_ext} and {map_ext} files was found under {}", root.display())]
    NoBuildFolderFound {
        root: PathBuf,
        binary_ext: String,
        map_ext: String,
    },

    /// Build folders exist but none holds a binary and map with the same name.
    #[error("Found {folders} build folder(s), but no binary has a map file with a matching name")]
    NoMatchingArtifacts { folders: usize },

    /// The user dismissed the candidate prompt.
    #[error("Artifact selection was cancelled")]
    SelectionCancelled,

    /// Selector was handed an empty list. Callers check for this first.
    #[error("No artifact candidates to select from")]
    NoCandidates,
}

/// Errors loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
