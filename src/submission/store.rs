use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use super::payload::StoredResult;

/// Single-slot durable cache for the most recent successful outcome.
/// Each successful submission overwrites the previous value, last write wins.
pub struct ResultCache {
    path: PathBuf,
}

impl ResultCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Self {
        Self::new(crate::config::default_result_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self, result: &StoredResult) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(result).context("serializing stored result")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        info!("💾 Stored assessment result at {}", self.path.display());
        Ok(())
    }

    /// Read the slot back, if a readable one exists. The submission flow only
    /// ever writes; this is for adapters that want to show the previous run.
    pub fn load(&self) -> Option<StoredResult> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(result) => Some(result),
            Err(err) => {
                warn!("Ignoring unreadable stored result at {}: {}", self.path.display(), err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AdditionalData;
    use crate::assessment::scoring::FopoLevel;
    use chrono::Utc;

    fn result_with_score(score: u8) -> StoredResult {
        StoredResult {
            timestamp: Utc::now(),
            score,
            level: FopoLevel::classify(score),
            additional_data: AdditionalData {
                email: "cache@example.com".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn store_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path().join("nested").join("last_result.json"));

        assert!(cache.load().is_none());

        cache.store(&result_with_score(38)).unwrap();
        let loaded = cache.load().unwrap();
        assert_eq!(loaded.score, 38);
        assert_eq!(loaded.level, FopoLevel::High);
        assert_eq!(loaded.additional_data.email, "cache@example.com");
    }

    #[test]
    fn second_store_overwrites_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path().join("last_result.json"));

        cache.store(&result_with_score(12)).unwrap();
        cache.store(&result_with_score(44)).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.score, 44);
        assert_eq!(loaded.level, FopoLevel::High);
    }

    #[test]
    fn corrupt_slot_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_result.json");
        std::fs::write(&path, "{not json").unwrap();

        let cache = ResultCache::new(path);
        assert!(cache.load().is_none());
    }
}
