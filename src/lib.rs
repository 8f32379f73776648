//! Synchronous file access for embedded Rhai scripts
//!
//! Installs three blocking host functions into a Rhai engine's global namespace:
//!
//! ```rhai
//! let text = readTextFile("/sdcard/app/strings.txt");
//! let blob = readBinaryFile("/sdcard/app/model.bin");
//! let cached = existsSync("/sdcard/app/cache");
//! ```
//!
//! Each call completes (or fails) before returning to the script. There is no
//! background thread, queue, or cancellation; embedders that must not block a
//! thread should run the script on a different one.
//!
//! # Text policy
//!
//! `readTextFile` maps every byte to the Latin-1 code point of the same value,
//! so any file yields a valid string: ASCII passes through and each byte
//! `>= 0x80` becomes two UTF-8 bytes. UTF-8 pass-through is available through
//! [`TextEncoding::Utf8`].
//!
//! # Errors
//!
//! Failures are raised as script runtime errors whose message is the only
//! detail, e.g. `readTextFile: expected string path` or
//! `Cannot open file: /x (No such file or directory (os error 2))`.
//! `existsSync` never raises for a missing path.
//!
//! # Embedding
//!
//! ```no_run
//! let mut engine = rhai::Engine::new();
//! syncfile::install(&mut engine);
//! let ok: bool = engine.eval(r#"existsSync("/etc/hosts")"#).unwrap();
//! ```

pub mod config;
mod engine;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod output;

pub use config::SyncFileConfig;
pub use engine::SyncFileEngine;
pub use error::SyncFileError;
pub use helpers::{install, install_with, BindingOptions, TextEncoding};
