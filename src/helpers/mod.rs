//! Host functions exposed to scripts
//!
//! [`install`] registers three functions in the engine's global namespace:
//!
//! ```rhai
//! let text = readTextFile("/data/notes.txt");   // string
//! let blob = readBinaryFile("/data/icon.png");  // Blob
//! if existsSync("/data/cache") { ... }          // bool
//! ```
//!
//! Every call blocks the calling thread until the file operation finishes.
//! Failures surface as script runtime errors carrying a message only; a
//! missing path given to `existsSync` is `false`, not an error.
//!
//! ## Modules
//!
//! - **read**: whole-file read into an owned buffer
//! - **text**: byte-to-string policy
//! - **binary**: buffer-to-`Blob` copy
//! - **exists**: `access(F_OK)` check

pub mod binary;
pub mod exists;
pub mod read;
pub mod text;

use crate::error::{self, SyncFileError};
use rhai::{Blob, Dynamic, Engine, EvalAltResult, ImmutableString, NativeCallContext};
use serde::{Deserialize, Serialize};

pub use exists::exists_sync;
pub use read::read_file_bytes;
pub use text::{bytes_to_text, TextEncoding};

/// Name of the text-reading host function.
pub const READ_TEXT_FILE: &str = "readTextFile";
/// Name of the binary-reading host function.
pub const READ_BINARY_FILE: &str = "readBinaryFile";
/// Name of the existence-check host function.
pub const EXISTS_SYNC: &str = "existsSync";

/// Knobs applied when the functions are installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingOptions {
    /// Policy used by `readTextFile`.
    pub text_encoding: TextEncoding,
    /// Largest file `readBinaryFile` will return, on top of the engine's own
    /// array size limit. `None` defers to the engine.
    pub max_binary_len: Option<usize>,
}

/// Install the host functions with default options.
pub fn install(engine: &mut Engine) {
    install_with(engine, BindingOptions::default());
}

/// Install the host functions on `engine`.
///
/// Safe to call repeatedly: each call re-registers the same names and
/// signatures, replacing the previous bindings (and their options).
pub fn install_with(engine: &mut Engine, options: BindingOptions) {
    let encoding = options.text_encoding;
    engine.register_fn(
        READ_TEXT_FILE,
        move |path: Dynamic| -> Result<String, Box<EvalAltResult>> {
            let path = string_arg(READ_TEXT_FILE, path)?;
            Ok(read_text_file(&path, encoding)?)
        },
    );

    let max_binary_len = options.max_binary_len;
    engine.register_fn(
        READ_BINARY_FILE,
        move |ctx: NativeCallContext, path: Dynamic| -> Result<Blob, Box<EvalAltResult>> {
            let path = string_arg(READ_BINARY_FILE, path)?;
            let limit = binary::effective_limit(ctx.engine().max_array_size(), max_binary_len);
            Ok(read_binary_file(&path, limit)?)
        },
    );

    engine.register_fn(
        EXISTS_SYNC,
        |path: Dynamic| -> Result<bool, Box<EvalAltResult>> {
            let path = string_arg(EXISTS_SYNC, path)?;
            let found = exists_sync(&path);
            tracing::debug!(function = EXISTS_SYNC, path = %path, found, "existence check");
            Ok(found)
        },
    );

    for name in [READ_TEXT_FILE, READ_BINARY_FILE, EXISTS_SYNC] {
        reject_wrong_arity(engine, name);
    }

    tracing::debug!(?options, "installed sync file bindings");
}

/// Read `path` as text under `encoding`.
pub fn read_text_file(path: &str, encoding: TextEncoding) -> error::Result<String> {
    let data = read_file_bytes(path)?;
    let len = data.len();
    let text = bytes_to_text(data, encoding);
    tracing::debug!(function = READ_TEXT_FILE, path, bytes = len, "read text file");
    Ok(text)
}

/// Read `path` into a [`Blob`] no larger than `limit`.
///
/// The limit is checked against the file's reported size before any buffer
/// is allocated, and again against the bytes actually read.
pub fn read_binary_file(path: &str, limit: Option<usize>) -> error::Result<Blob> {
    let data = read::read_file_bytes_limited(path, limit)?;
    let blob = binary::to_blob(data, limit)?;
    tracing::debug!(function = READ_BINARY_FILE, path, bytes = blob.len(), "read binary file");
    Ok(blob)
}

/// Accept only a string argument. No coercion: numbers, chars and `()` are rejected.
fn string_arg(function: &'static str, value: Dynamic) -> Result<ImmutableString, SyncFileError> {
    value
        .into_immutable_string()
        .map_err(|_| SyncFileError::Argument { function })
}

/// Register overloads for zero and two to four arguments that raise the
/// argument error, so a wrong call reports the function name instead of
/// "function not found".
fn reject_wrong_arity(engine: &mut Engine, function: &'static str) {
    engine.register_fn(function, move || -> Result<Dynamic, Box<EvalAltResult>> {
        Err(SyncFileError::Argument { function }.into())
    });
    engine.register_fn(
        function,
        move |_: Dynamic, _: Dynamic| -> Result<Dynamic, Box<EvalAltResult>> {
            Err(SyncFileError::Argument { function }.into())
        },
    );
    engine.register_fn(
        function,
        move |_: Dynamic, _: Dynamic, _: Dynamic| -> Result<Dynamic, Box<EvalAltResult>> {
            Err(SyncFileError::Argument { function }.into())
        },
    );
    engine.register_fn(
        function,
        move |_: Dynamic,
              _: Dynamic,
              _: Dynamic,
              _: Dynamic|
              -> Result<Dynamic, Box<EvalAltResult>> {
            Err(SyncFileError::Argument { function }.into())
        },
    );
}
