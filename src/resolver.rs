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

//! Entry point: find the binary/map pair the analyzer should load.
//!
//! Configured paths win outright when both are valid. Otherwise the workspace is searched
//! (priority folders first, then everything), artifacts are paired by stem, and the user
//! picks when there is more than one pair. Every call starts from scratch; nothing is
//! cached between calls.

use crate::artifacts::{Candidate, ResolvedPaths};
use crate::case_policy::CaseSensitivity;
use crate::collector::CandidateCollector;
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::fs_access::{FileSystem, OsFileSystem};
use crate::notify::{LogNotifier, Notifier};
use crate::prompt::{CandidatePrompt, FirstCandidate};
use crate::selector::select;
use crate::utils::config_path_to_path_buf;
use crate::validate::{exists_and_readable, is_readable_file};
use log::debug;
use std::path::{Path, PathBuf};

pub struct ArtifactResolver {
    config: ResolverConfig,
    workspace_root: Option<PathBuf>,
    case: CaseSensitivity,
    fs: Box<dyn FileSystem>,
    prompt: Box<dyn CandidatePrompt>,
    notifier: Box<dyn Notifier>,
}

impl ArtifactResolver {
    /// Resolver over the real filesystem, notifying through the log. Without a prompt
    /// from `with_prompt`, ties go to the first candidate found. Case sensitivity
    /// defaults to the host platform's convention.
    pub fn new(config: ResolverConfig, workspace_root: Option<PathBuf>) -> Self {
        Self {
            config,
            workspace_root,
            case: CaseSensitivity::for_host(),
            fs: Box::new(OsFileSystem),
            prompt: Box::new(FirstCandidate),
            notifier: Box::new(LogNotifier),
        }
    }

    pub fn with_case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.case = case;
        self
    }

    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_prompt(mut self, prompt: impl CandidatePrompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    pub fn resolve(&mut self) -> Result<ResolvedPaths, ResolveError> {
        let (binary_path, map_path) = match self.configured_pair() {
            Some(pair) => pair,
            None => {
                let candidates = self.candidates()?;
                let chosen = select(candidates, self.prompt.as_mut())?;
                debug!(
                    "Selected {} in {}",
                    chosen.display_label, chosen.relative_folder
                );
                (chosen.binary_path, chosen.map_path)
            }
        };

        Ok(ResolvedPaths {
            map_path,
            binary_path,
            toolchain_path: self.resolve_toolchain(),
        })
    }

    /// Search the workspace and return every binary/map pair, without selecting.
    pub fn candidates(&self) -> Result<Vec<Candidate>, ResolveError> {
        let root = self
            .workspace_root
            .as_deref()
            .ok_or(ResolveError::NoWorkspace)?;
        let extensions = self.config.extensions();
        CandidateCollector {
            fs: self.fs.as_ref(),
            workspace_root: root,
            extensions: &extensions,
            search_folders: &self.config.search_folders,
            case: self.case,
        }
        .collect()
    }

    fn to_path(&self, configured: &str) -> PathBuf {
        config_path_to_path_buf(configured, self.workspace_root.as_deref())
    }

    /// Both configured artifact paths, if both are set and are readable files.
    fn configured_pair(&self) -> Option<(PathBuf, PathBuf)> {
        match (self.config.binary_override(), self.config.map_override()) {
            (Some(binary), Some(map)) => {
                let binary = self.to_path(binary);
                let map = self.to_path(map);
                let binary_ok = is_readable_file(self.fs.as_ref(), &binary);
                let map_ok = is_readable_file(self.fs.as_ref(), &map);
                if binary_ok && map_ok {
                    debug!(
                        "Using configured binary {} and map {}",
                        binary.display(),
                        map.display()
                    );
                    Some((binary, map))
                } else {
                    debug!("Configured binary/map paths are not usable, searching the workspace");
                    None
                }
            }
            (None, None) => None,
            _ => {
                debug!("Only one of binaryFilePath/mapFilePath is set, searching the workspace");
                None
            }
        }
    }

    fn resolve_toolchain(&self) -> Option<PathBuf> {
        let configured = self.config.toolchain_override()?;
        let path = self.to_path(configured);
        if exists_and_readable(self.fs.as_ref(), &path) {
            self.notifier
                .info(&format!("Using toolchain at {}", path.display()));
            Some(path)
        } else {
            self.notifier.warn(&format!(
                "Toolchain path {} does not exist or is not readable, ignoring it",
                path.display()
            ));
            None
        }
    }
}
