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

use crate::artifacts::{ArtifactExtensions, Candidate};
use crate::fs_access::FileSystem;
use crate::utils::relative_folder;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Pair every binary in `directory` with the map file of the same stem.
///
/// Stems must match exactly, case included (`app.elf` pairs with `app.map`, never with
/// `App.map`). Binaries without a map are dropped silently. Candidates come out in
/// binary file name order.
pub fn pair_artifacts(
    fs: &dyn FileSystem,
    directory: &Path,
    workspace_root: &Path,
    extensions: &ArtifactExtensions,
) -> Vec<Candidate> {
    let entries = match fs.read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", directory.display(), e);
            return Vec::new();
        }
    };

    let mut binaries: Vec<(&str, &PathBuf)> = Vec::new();
    let mut maps: HashMap<&str, &PathBuf> = HashMap::new();
    for entry in entries.iter().filter(|e| !e.is_dir) {
        if let Some(stem) = extensions.binary_stem(&entry.name) {
            binaries.push((stem, &entry.path));
        }
        if let Some(stem) = extensions.map_stem(&entry.name) {
            maps.insert(stem, &entry.path);
        }
    }

    let folder = relative_folder(directory, workspace_root);
    binaries
        .into_iter()
        .filter_map(|(stem, binary)| match maps.get(stem) {
            Some(map) => Some(Candidate::new(
                stem,
                folder.clone(),
                binary.clone(),
                (*map).clone(),
            )),
            None => {
                debug!("{} has no matching map file", binary.display());
                None
            }
        })
        .collect()
}
