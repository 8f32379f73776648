//! Rhai engine with the file bindings installed
//!
//! Embedders that already own an [`Engine`] can call
//! [`helpers::install`](crate::helpers::install) directly; this wrapper is for
//! callers that just want to run scripts.

use crate::helpers::{self, BindingOptions};
use anyhow::{Context, Result};
use rhai::{Dynamic, Engine, Scope};
use std::path::Path;

/// Script engine with `readTextFile`, `readBinaryFile` and `existsSync`.
pub struct SyncFileEngine {
    engine: Engine,
    options: BindingOptions,
}

impl SyncFileEngine {
    /// Create an engine with default binding options
    pub fn new() -> Self {
        Self::with_options(BindingOptions::default())
    }

    /// Create an engine with the given binding options
    pub fn with_options(options: BindingOptions) -> Self {
        let mut engine = Engine::new();
        helpers::install_with(&mut engine, options);
        Self { engine, options }
    }

    /// Install the bindings again with the stored options.
    pub fn reinstall(&mut self) {
        helpers::install_with(&mut self.engine, self.options);
    }

    /// Options the bindings were installed with
    pub fn options(&self) -> BindingOptions {
        self.options
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable access, e.g. to set limits or register more functions.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Evaluate an inline script
    pub fn eval(&self, script: &str) -> Result<Dynamic> {
        self.eval_with_scope(&mut Scope::new(), script)
    }

    /// Evaluate an inline script against `scope`
    pub fn eval_with_scope(&self, scope: &mut Scope, script: &str) -> Result<Dynamic> {
        self.engine
            .eval_with_scope::<Dynamic>(scope, script)
            .map_err(|e| anyhow::anyhow!("Script failed: {}", e))
    }

    /// Run a script file and return its final value
    pub fn run_file(&self, script_path: &Path) -> Result<Dynamic> {
        let script = std::fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script: {}", script_path.display()))?;

        let mut scope = Scope::new();
        scope.push_constant(
            "SCRIPT_DIR",
            script_path
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
        );

        tracing::debug!(script = %script_path.display(), "running script");
        self.eval_with_scope(&mut scope, &script)
            .with_context(|| format!("In script {}", script_path.display()))
    }
}

impl Default for SyncFileEngine {
    fn default() -> Self {
        Self::new()
    }
}
