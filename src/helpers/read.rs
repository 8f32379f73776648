//! Whole-file reads into an owned buffer

use crate::error::{Result, SyncFileError};
use std::fs::File;
use std::io::Read;

/// Read the full contents of `path` into a buffer sized from the file's metadata.
///
/// The handle is closed when `file` drops, so every successful open is matched
/// by exactly one close on every return path. A read that returns zero or fails
/// ends the loop and the buffer is truncated to what was actually read; short
/// reads are not an error and are never retried.
pub fn read_file_bytes(path: &str) -> Result<Vec<u8>> {
    read_file_bytes_limited(path, None)
}

/// Like [`read_file_bytes`], but fail before allocating or reading anything
/// when the reported size exceeds `limit`.
pub fn read_file_bytes_limited(path: &str, limit: Option<usize>) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| SyncFileError::Open {
        path: path.to_string(),
        source,
    })?;

    let reported = file
        .metadata()
        .map_err(|source| SyncFileError::Stat {
            path: path.to_string(),
            source,
        })?
        .len();

    if let Some(max) = limit {
        if reported > max as u64 {
            return Err(SyncFileError::Allocation {
                len: reported,
                limit,
            });
        }
    }

    let size = usize::try_from(reported).map_err(|_| SyncFileError::Allocation {
        len: reported,
        limit,
    })?;

    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| SyncFileError::Allocation {
            len: reported,
            limit,
        })?;
    data.resize(size, 0);

    let mut offset = 0;
    while offset < size {
        match file.read(&mut data[offset..]) {
            Ok(0) => break,
            Ok(n) => offset += n,
            Err(e) => {
                tracing::trace!(path, offset, error = %e, "read stopped early");
                break;
            }
        }
    }

    if offset < size {
        tracing::trace!(path, expected = size, actual = offset, "short read");
        data.truncate(offset);
    }

    Ok(data)
}
