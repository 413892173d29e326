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

/// Filesystem access used by the resolver. Everything that touches the disk during a
/// resolution goes through `FileSystem`, so tests can count listings or inject failures.
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub name: String,
    // Symlinks report the kind of their target
    pub is_dir: bool,
}

pub trait FileSystem {
    /// List the immediate entries of `dir`, sorted by name.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Check read access: open a file, or list a directory.
    fn can_read(&self, path: &Path) -> bool;

    /// Resolve symlinks and `.`/`..`. Falls back to the input when that fails.
    fn canonicalize(&self, path: &Path) -> PathBuf;
}

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            // Entries can vanish between readdir and stat; skip them rather than fail the listing
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            // Dangling symlinks have no target kind; they are neither files nor folders
            let is_dir = match fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                Err(e) => {
                    debug!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn can_read(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => fs::read_dir(path).is_ok(),
            Ok(_) => fs::File::open(path).is_ok(),
            Err(_) => false,
        }
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_dir_is_sorted_and_classifies_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.map"), b"").unwrap();
        fs::write(dir.path().join("a.elf"), b"").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let entries = OsFileSystem.read_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.elf", "b.map", "c"]);
        assert!(!entries[0].is_dir);
        assert!(entries[2].is_dir);
    }

    #[test]
    fn read_dir_of_missing_directory_fails() {
        let dir = tempdir().unwrap();
        assert!(OsFileSystem.read_dir(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn can_read_files_and_directories() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.elf");
        fs::write(&file, b"\x7fELF").unwrap();

        assert!(OsFileSystem.can_read(&file));
        assert!(OsFileSystem.can_read(dir.path()));
        assert!(!OsFileSystem.can_read(&dir.path().join("missing.elf")));
        assert!(OsFileSystem.is_file(&file));
        assert!(!OsFileSystem.is_file(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_left_out_of_listing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.map"), b"").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.elf"), dir.path().join("app.elf"))
            .unwrap();

        let entries = OsFileSystem.read_dir(dir.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["app.map"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_reported_as_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = OsFileSystem.read_dir(dir.path()).unwrap();
        assert!(entries.iter().all(|e| e.is_dir));
        assert_eq!(
            OsFileSystem.canonicalize(&dir.path().join("link")),
            OsFileSystem.canonicalize(&dir.path().join("real"))
        );
    }
}
