//! Existence checks that never fail

/// Check whether `path` names an entry reachable right now.
///
/// Uses `access(2)` with `F_OK`, so symlinks are followed and permissions on
/// the entry itself are not considered. Any failure reads as `false`.
#[cfg(unix)]
pub fn exists_sync(path: &str) -> bool {
    use std::ffi::CString;

    // An interior NUL cannot name a file.
    let Ok(c_path) = CString::new(path) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::F_OK) == 0 }
}

#[cfg(not(unix))]
pub fn exists_sync(path: &str) -> bool {
    std::path::Path::new(path).try_exists().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_existing_file_and_dir() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(exists_sync(file.to_str().unwrap()));
        assert!(exists_sync(temp.path().to_str().unwrap()));
    }

    #[test]
    fn test_missing_path() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing/deeper");
        assert!(!exists_sync(missing.to_str().unwrap()));
    }

    #[test]
    fn test_degenerate_paths() {
        assert!(!exists_sync(""));
        assert!(!exists_sync("bad\0path"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink() {
        let temp = tempdir().unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();
        assert!(!exists_sync(link.to_str().unwrap()));
    }
}
