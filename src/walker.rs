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

/// Recursive search for build output folders.
///
/// A folder qualifies when it directly contains at least one binary and at least one map
/// file. Files further down the tree do not count toward their ancestors: build systems
/// put the image and its map side by side, and a `Debug` and `Release` build living under
/// the same parent must not make the parent look like a build folder.
use crate::artifacts::ArtifactExtensions;
use crate::case_policy::CaseSensitivity;
use crate::fs_access::FileSystem;
use crate::utils::path_key;
use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Qualifying folders in the order they were first found, deduplicated by identity.
#[derive(Debug, Default)]
pub struct FoundFolders {
    folders: Vec<PathBuf>,
    keys: HashSet<String>,
}

impl FoundFolders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `folder` under `key`. Returns false if that identity is already present.
    pub fn insert(&mut self, key: String, folder: PathBuf) -> bool {
        if !self.keys.insert(key) {
            return false;
        }
        self.folders.push(folder);
        true
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.folders.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.folders
    }
}

/// Depth-first walker. One instance may walk several roots; the visited set is shared,
/// so a folder reachable from two roots (or through a symlink) is only explored once.
pub struct DirectoryWalker<'a> {
    fs: &'a dyn FileSystem,
    extensions: &'a ArtifactExtensions,
    case: CaseSensitivity,
    visited: HashSet<String>,
    found: FoundFolders,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        extensions: &'a ArtifactExtensions,
        case: CaseSensitivity,
    ) -> Self {
        Self {
            fs,
            extensions,
            case,
            visited: HashSet::new(),
            found: FoundFolders::new(),
        }
    }

    pub fn walk(&mut self, root: &Path) {
        self.visit(root);
    }

    pub fn found(&self) -> &FoundFolders {
        &self.found
    }

    pub fn into_found(self) -> FoundFolders {
        self.found
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    fn identity_key(&self, dir: &Path) -> String {
        self.case
            .normalize_key(path_key(&self.fs.canonicalize(dir)))
    }

    fn visit(&mut self, dir: &Path) {
        let key = self.identity_key(dir);
        if !self.visited.insert(key.clone()) {
            debug!("Already visited {}, skipping", dir.display());
            return;
        }

        // An unreadable folder counts as empty; its siblings and ancestors are still searched
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list {}: {}", dir.display(), e);
                Vec::new()
            }
        };

        let mut has_binary = false;
        let mut has_map = false;
        for entry in &entries {
            if entry.is_dir {
                self.visit(&entry.path);
                continue;
            }
            has_binary |= self.extensions.is_binary(&entry.name);
            has_map |= self.extensions.is_map(&entry.name);
        }

        if has_binary && has_map && self.found.insert(key, dir.to_path_buf()) {
            debug!("Build folder candidate: {}", dir.display());
        }
    }
}

/// Walk a single root and return every qualifying folder beneath it (root included).
pub fn find_matching_folders(
    fs: &dyn FileSystem,
    root: &Path,
    extensions: &ArtifactExtensions,
    case: CaseSensitivity,
) -> FoundFolders {
    let mut walker = DirectoryWalker::new(fs, extensions, case);
    walker.walk(root);
    walker.into_found()
}
