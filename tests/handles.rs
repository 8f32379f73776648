//! File handle accounting
//!
//! Kept in its own test binary so no other test opens descriptors while the
//! table is being counted.

#![cfg(target_os = "linux")]

use syncfile::helpers::{self, TextEncoding};
use tempfile::TempDir;

fn open_fds() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn test_every_read_path_closes_its_handle() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("data.txt");
    std::fs::write(&file, b"some bytes").unwrap();
    let file = file.to_string_lossy().to_string();
    let missing = dir.path().join("missing").to_string_lossy().to_string();
    let directory = dir.path().to_string_lossy().to_string();

    let before = open_fds();
    for _ in 0..50 {
        assert!(helpers::read_text_file(&file, TextEncoding::Latin1).is_ok());
        assert!(helpers::read_binary_file(&file, None).is_ok());
        // Rejected by the size limit after the open succeeded
        assert!(helpers::read_binary_file(&file, Some(1)).is_err());
        assert!(helpers::read_text_file(&missing, TextEncoding::Latin1).is_err());
        assert!(helpers::read_binary_file(&missing, None).is_err());
        // open(2) succeeds, read(2) fails with EISDIR
        assert!(helpers::read_binary_file(&directory, None).unwrap().is_empty());
        assert!(helpers::exists_sync(&file));
    }
    assert_eq!(open_fds(), before);
}
