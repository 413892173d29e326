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

/// Candidate collection: walk the priority folders, fall back to the whole workspace,
/// then pair artifacts inside every qualifying folder.
use crate::artifacts::{ArtifactExtensions, Candidate};
use crate::case_policy::CaseSensitivity;
use crate::error::ResolveError;
use crate::fs_access::FileSystem;
use crate::matcher::pair_artifacts;
use crate::walker::{DirectoryWalker, FoundFolders};
use log::debug;
use std::path::Path;

pub struct CandidateCollector<'a> {
    pub fs: &'a dyn FileSystem,
    pub workspace_root: &'a Path,
    pub extensions: &'a ArtifactExtensions,
    /// Folder names relative to the workspace root, highest priority first
    pub search_folders: &'a [String],
    pub case: CaseSensitivity,
}

impl<'a> CandidateCollector<'a> {
    /// Every folder that holds both a binary and a map. Priority folders win; the whole
    /// workspace is only walked when none of them produced a match.
    pub fn find_folders(&self) -> FoundFolders {
        let mut walker = DirectoryWalker::new(self.fs, self.extensions, self.case);

        for name in self.search_folders {
            let root = self.workspace_root.join(name);
            if !self.fs.is_dir(&root) {
                continue;
            }
            debug!("Searching priority folder {}", root.display());
            walker.walk(&root);
        }

        if walker.found().is_empty() {
            debug!(
                "No priority folder matched, searching all of {}",
                self.workspace_root.display()
            );
            walker.walk(self.workspace_root);
        }

        debug!(
            "Visited {} folder(s), {} qualify",
            walker.visited_count(),
            walker.found().len()
        );
        walker.into_found()
    }

    /// All binary/map pairs, in the order their folders were found.
    pub fn collect(&self) -> Result<Vec<Candidate>, ResolveError> {
        let folders = self.find_folders();
        if folders.is_empty() {
            return Err(ResolveError::NoBuildFolderFound {
                root: self.workspace_root.to_path_buf(),
                binary_ext: self.extensions.binary.clone(),
                map_ext: self.extensions.map.clone(),
            });
        }

        let candidates: Vec<Candidate> = folders
            .iter()
            .flat_map(|dir| pair_artifacts(self.fs, dir, self.workspace_root, self.extensions))
            .collect();
        if candidates.is_empty() {
            return Err(ResolveError::NoMatchingArtifacts {
                folders: folders.len(),
            });
        }
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEARCH_FOLDERS;
    use crate::fs_access::OsFileSystem;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn touch(path: PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn collect(root: &Path) -> Result<Vec<Candidate>, ResolveError> {
        let folders: Vec<String> = DEFAULT_SEARCH_FOLDERS.iter().map(|s| s.to_string()).collect();
        let exts = ArtifactExtensions::default();
        CandidateCollector {
            fs: &OsFileSystem,
            workspace_root: root,
            extensions: &exts,
            search_folders: &folders,
            case: CaseSensitivity::Sensitive,
        }
        .collect()
    }

    #[test]
    fn priority_folder_shadows_rest_of_workspace() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("build/app.elf"));
        touch(dir.path().join("build/app.map"));
        touch(dir.path().join("vendor/sdk/demo.elf"));
        touch(dir.path().join("vendor/sdk/demo.map"));

        let candidates = collect(dir.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_label, "app");
        assert_eq!(candidates[0].relative_folder, "build");
    }

    #[test]
    fn priority_order_is_respected() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("out/second.elf"));
        touch(dir.path().join("out/second.map"));
        touch(dir.path().join("build/first.elf"));
        touch(dir.path().join("build/first.map"));

        let labels: Vec<_> = collect(dir.path())
            .unwrap()
            .into_iter()
            .map(|c| c.display_label)
            .collect();
        assert_eq!(labels, ["first", "second"]);
    }

    #[test]
    fn falls_back_to_whole_workspace() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("fw/target/app.elf"));
        touch(dir.path().join("fw/target/app.map"));
        // A priority folder that exists but has nothing useful
        touch(dir.path().join("build/CMakeCache.txt"));

        let candidates = collect(dir.path()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].relative_folder, "fw/target");
    }

    #[test]
    fn priority_folder_nested_in_another_is_found_once() {
        let dir = tempdir().unwrap();
        // "build" is walked first and already reaches build/Debug
        touch(dir.path().join("build/Debug/app.elf"));
        touch(dir.path().join("build/Debug/app.map"));

        let folders: Vec<String> = vec!["build".into(), "build/Debug".into()];
        let exts = ArtifactExtensions::default();
        let found = CandidateCollector {
            fs: &OsFileSystem,
            workspace_root: dir.path(),
            extensions: &exts,
            search_folders: &folders,
            case: CaseSensitivity::Sensitive,
        }
        .find_folders();
        assert_eq!(found.into_vec(), vec![dir.path().join("build/Debug")]);
    }

    #[test]
    fn empty_tree_reports_no_build_folder() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("src/main.c"));

        assert!(matches!(
            collect(dir.path()),
            Err(ResolveError::NoBuildFolderFound { .. })
        ));
    }

    #[test]
    fn unpaired_artifacts_report_no_matching_artifacts() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("build/app.elf"));
        touch(dir.path().join("build/boot.map"));

        assert!(matches!(
            collect(dir.path()),
            Err(ResolveError::NoMatchingArtifacts { folders: 1 })
        ));
    }
}
