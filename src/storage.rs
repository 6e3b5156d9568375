//! Key-value storage collaborators for history persistence
//!
//! The history store talks to an abstract async key-value interface so
//! the core logic stays testable without a real backing file. Two
//! implementations are provided: a JSON file store following the XDG
//! cache layout, and an in-memory store used in tests and as the
//! degraded fallback when the filesystem is unavailable.

use crate::error::{AppError, Result};
use crate::logging::Logger;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Async key-value storage interface
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Persist `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Remove the value stored under `key`, if any
    async fn remove(&self, key: &str) -> Result<()>;
}

/// JSON file store, one document per key
pub struct FileStore {
    /// Directory holding one `<key>.json` file per key
    base_dir: PathBuf,
    /// Whether verbose logging is enabled
    verbose: bool,
}

impl FileStore {
    /// Create a file store rooted at the default XDG cache directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            base_dir: Self::default_base_dir()?,
            verbose: false,
        })
    }

    /// Create a file store rooted at an explicit directory
    pub fn with_base_dir(base_dir: PathBuf, verbose: bool) -> Self {
        Self { base_dir, verbose }
    }

    /// Get the default storage directory following the XDG specification
    pub fn default_base_dir() -> Result<PathBuf> {
        let cache_dir = if let Ok(xdg_cache) = std::env::var("XDG_CACHE_HOME") {
            PathBuf::from(xdg_cache)
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home).join(".cache")
        } else {
            return Err(AppError::storage(
                "Cannot determine storage directory: neither XDG_CACHE_HOME nor HOME is set",
            ));
        };

        Ok(cache_dir.join("speedtest-simulator"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    fn ensure_base_dir(&self) -> Result<()> {
        if !self.base_dir.exists() {
            if self.verbose {
                eprintln!("[STORE] Creating storage directory: {}", self.base_dir.display());
            }
            fs::create_dir_all(&self.base_dir).map_err(|e| {
                AppError::storage(format!(
                    "Failed to create storage directory '{}': {}",
                    self.base_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        if !path.exists() {
            if self.verbose {
                eprintln!("[STORE] No value for '{}' at: {}", key, path.display());
            }
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::storage(format!("Failed to read '{}': {}", path.display(), e))
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            AppError::storage(format!("Failed to parse '{}': {}", path.display(), e))
        })?;

        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.ensure_base_dir()?;

        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(&value)
            .map_err(|e| AppError::storage(format!("Failed to serialize '{}': {}", key, e)))?;

        if self.verbose {
            eprintln!("[STORE] Writing '{}' to: {}", key, path.display());
        }

        fs::write(&path, content).map_err(|e| {
            AppError::storage(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            if self.verbose {
                eprintln!("[STORE] Removing '{}': {}", key, path.display());
            }
            fs::remove_file(&path).map_err(|e| {
                AppError::storage(format!("Failed to remove '{}': {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// In-memory store backed by a HashMap
///
/// Used by tests and as the no-persistence fallback when the file
/// store cannot be set up.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

/// Store that degrades to in-memory operation on the first failure of
/// its primary backend
///
/// Any primary error (such as an unwritable directory or a file that
/// no longer parses) switches all further operations to an empty
/// in-memory store and emits a single warning. A broken cache
/// directory costs persistence, not the run itself.
pub struct FallbackStore {
    primary: Box<dyn KeyValueStore>,
    fallback: MemoryStore,
    degraded: AtomicBool,
    logger: Logger,
}

impl FallbackStore {
    /// Wrap a primary store, logging degradation through `logger`
    pub fn new(primary: Box<dyn KeyValueStore>, logger: Logger) -> Self {
        Self {
            primary,
            fallback: MemoryStore::new(),
            degraded: AtomicBool::new(false),
            logger,
        }
    }

    /// Whether the primary store has already failed
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }

    fn degrade(&self, error: &AppError) {
        // The warning is emitted once, on the transition only
        if !self.degraded.swap(true, Ordering::SeqCst) {
            self.logger
                .warn("History storage unavailable, results will not persist")
                .error_info(error)
                .log();
        }
    }
}

#[async_trait]
impl KeyValueStore for FallbackStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        if self.is_degraded() {
            return self.fallback.get(key).await;
        }
        match self.primary.get(key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.degrade(&e);
                self.fallback.get(key).await
            }
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        if self.is_degraded() {
            return self.fallback.set(key, value).await;
        }
        match self.primary.set(key, value.clone()).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.degrade(&e);
                self.fallback.set(key, value).await
            }
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.is_degraded() {
            return self.fallback.remove(key).await;
        }
        match self.primary.remove(key).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.degrade(&e);
                self.fallback.remove(key).await
            }
        }
    }
}
