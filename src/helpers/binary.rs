//! Copying file bytes into a script-owned `Blob`

use crate::error::{Result, SyncFileError};
use rhai::Blob;

/// Copy `data` into a freshly allocated [`Blob`] of exactly the same length.
///
/// The blob is allocated first and then filled, so the native buffer and the
/// script value never share storage. `limit` is the largest blob the engine
/// accepts; anything larger fails instead of being truncated.
pub fn to_blob(data: Vec<u8>, limit: Option<usize>) -> Result<Blob> {
    let len = data.len();
    if let Some(max) = limit {
        if len > max {
            return Err(SyncFileError::Allocation {
                len: len as u64,
                limit,
            });
        }
    }

    let mut blob = Blob::new();
    blob.try_reserve_exact(len)
        .map_err(|_| SyncFileError::Allocation {
            len: len as u64,
            limit,
        })?;
    blob.extend_from_slice(&data);

    Ok(blob)
}

/// Effective blob limit from the engine and the binding options.
///
/// Rhai reports an unlimited array size as zero.
pub fn effective_limit(engine_max: usize, configured: Option<usize>) -> Option<usize> {
    let engine_max = (engine_max > 0).then_some(engine_max);
    match (engine_max, configured) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_bytes_verbatim() {
        let blob = to_blob(vec![0x41, 0xFF, 0x42], None).unwrap();
        assert_eq!(blob, vec![0x41, 0xFF, 0x42]);
    }

    #[test]
    fn test_empty_buffer() {
        let blob = to_blob(Vec::new(), Some(0)).unwrap();
        assert!(blob.is_empty());
    }

    #[test]
    fn test_at_limit_succeeds() {
        let blob = to_blob(vec![0; 16], Some(16)).unwrap();
        assert_eq!(blob.len(), 16);
    }

    #[test]
    fn test_over_limit_fails() {
        let err = to_blob(vec![0; 17], Some(16)).unwrap_err();
        assert!(matches!(
            err,
            SyncFileError::Allocation {
                len: 17,
                limit: Some(16)
            }
        ));
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(0, None), None);
        assert_eq!(effective_limit(0, Some(8)), Some(8));
        assert_eq!(effective_limit(100, None), Some(100));
        assert_eq!(effective_limit(100, Some(8)), Some(8));
        assert_eq!(effective_limit(4, Some(8)), Some(4));
    }
}
