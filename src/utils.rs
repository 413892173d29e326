use std::path::{Path, PathBuf};
use urlencoding::decode;

/// Turn a user-configured path string into a filesystem path.
///
/// Accepts plain paths and `file://` URIs (as written by editor settings). Relative paths
/// are taken relative to `base` when one is given. No symlink resolution happens here: a
/// configured absolute path comes back exactly as it was written.
pub fn config_path_to_path_buf(source_path: &str, base: Option<&Path>) -> PathBuf {
    let mut path_str = source_path.trim().to_string();

    if let Some(rest) = path_str.strip_prefix("file://") {
        let decoded = decode(rest).map(|s| s.into_owned()).unwrap_or_else(|_| rest.to_string());
        path_str = decoded;

        // On Windows, file:///C:/... becomes /C:/... so we need to strip the leading /
        if cfg!(windows) && path_str.starts_with('/') && path_str.chars().nth(2) == Some(':') {
            path_str.remove(0);
        }
    }

    // WSL mount paths (/mnt/c/...) only mean C:/ when we are the Windows side
    if cfg!(windows) && path_str.starts_with("/mnt/") {
        let parts: Vec<&str> = path_str.split('/').collect();
        if parts.len() >= 3 && parts[2].len() == 1 {
            let drive_letter = parts[2].to_uppercase();
            let remaining = parts[3..].join("/");
            path_str = format!("{}:/{}", drive_letter, remaining);
        }
    }

    let path = PathBuf::from(path_str);
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

/// String form of a path used for identity comparisons: forward slashes, upper-case
/// drive letter, upper-case UNC server and share.
pub fn path_key(path: &Path) -> String {
    let mut key = path.to_string_lossy().replace('\\', "/");

    if cfg!(windows) && key.chars().nth(1) == Some(':') {
        let mut chars = key.chars();
        if let Some(drive) = chars.next() {
            key = format!("{}{}", drive.to_ascii_uppercase(), chars.as_str());
        }
    }

    if let Some(unc) = key.strip_prefix("//") {
        let parts: Vec<String> = unc
            .split('/')
            .enumerate()
            .map(|(i, s)| if i < 2 { s.to_uppercase() } else { s.to_string() })
            .collect();
        key = format!("//{}", parts.join("/"));
    }

    // Trailing separators would make "build" and "build/" distinct
    while key.len() > 1 && key.ends_with('/') {
        key.pop();
    }
    key
}

/// `dir` relative to `root`, with forward slashes. "." when they are the same folder.
/// Falls back to the full path when `dir` is not under `root`.
pub fn relative_folder(dir: &Path, root: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => path_key(rel),
        Err(_) => path_key(dir),
    }
}
