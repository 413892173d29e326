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

//! Case sensitivity of the filesystem being searched.
//!
//! Directory identity keys are lower-cased on case-insensitive filesystems so that
//! `Build/Debug` and `build/debug` count as one folder. The policy is passed in
//! explicitly; `detect` asks the filesystem itself instead of guessing from the host OS.

use log::debug;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Default assumption for the host platform: Windows and macOS volumes are usually
    /// case-insensitive, everything else is not.
    pub fn for_host() -> Self {
        if cfg!(any(windows, target_os = "macos")) {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        }
    }

    /// Test `dir` by creating a mixed-case temporary file and checking whether the
    /// case-flipped name refers to it. Returns `None` if the file could not be created
    /// (read-only folder, missing folder).
    pub fn detect(dir: &Path) -> Option<Self> {
        let marker = tempfile::Builder::new()
            .prefix("CaseCheck")
            .suffix(".tmp")
            .tempfile_in(dir)
            .ok()?;
        let name = marker.path().file_name()?.to_str()?;
        let flipped: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect();
        let policy = if dir.join(&flipped).exists() {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        };
        debug!("Filesystem at {} is {:?}", dir.display(), policy);
        Some(policy)
    }

    pub fn detect_or_host(dir: &Path) -> Self {
        Self::detect(dir).unwrap_or_else(Self::for_host)
    }

    /// Apply the policy to an identity key.
    pub fn normalize_key(self, key: String) -> String {
        match self {
            CaseSensitivity::Sensitive => key,
            CaseSensitivity::Insensitive => key.to_lowercase(),
        }
    }
}
