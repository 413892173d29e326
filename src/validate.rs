use crate::fs_access::FileSystem;
use log::debug;
use std::path::Path;

/// True when `path` exists and can be opened for reading (listed, for a directory).
/// Never fails: a missing path and a permission error both come back as `false`.
pub fn exists_and_readable(fs: &dyn FileSystem, path: &Path) -> bool {
    let ok = fs.can_read(path);
    if !ok {
        debug!("{} does not exist or is not readable", path.display());
    }
    ok
}

/// Like `exists_and_readable`, but only a regular file (or a link to one) passes.
pub fn is_readable_file(fs: &dyn FileSystem, path: &Path) -> bool {
    if !fs.is_file(path) {
        debug!("{} is not a file", path.display());
        return false;
    }
    exists_and_readable(fs, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_access::OsFileSystem;
    use tempfile::tempdir;

    #[test]
    fn existing_file_is_valid() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("app.map");
        std::fs::write(&map, "Memory Configuration\n").unwrap();
        assert!(exists_and_readable(&OsFileSystem, &map));
    }

    #[test]
    fn missing_file_is_invalid() {
        let dir = tempdir().unwrap();
        assert!(!exists_and_readable(&OsFileSystem, &dir.path().join("app.map")));
    }

    #[test]
    fn folder_is_readable_but_not_a_readable_file() {
        let dir = tempdir().unwrap();
        let map = dir.path().join("app.map");
        std::fs::write(&map, "").unwrap();

        assert!(exists_and_readable(&OsFileSystem, dir.path()));
        assert!(!is_readable_file(&OsFileSystem, dir.path()));
        assert!(is_readable_file(&OsFileSystem, &map));
        assert!(!is_readable_file(&OsFileSystem, &dir.path().join("gone.map")));
    }
}
