// Attempt value memory
//
// Persistent mapping from attempt key to a running scalar value estimate,
// updated with a one-step Q-style recurrence and flushed to disk as a whole
// document after every attempt. Keys are `attempt_<n>` with n the zero-based
// ordinal within a run, so values accumulate across runs and problem
// statements; the keying is kept for compatibility with the stored format.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct AttemptMemory {
    table: HashMap<String, f64>,
    path: PathBuf,
}

impl AttemptMemory {
    /// Load the value table from disk. A missing file is an empty table.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let table = if path.exists() {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read attempt memory: {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse attempt memory: {}", path.display()))?
        } else {
            HashMap::new()
        };

        Ok(Self { table, path })
    }

    /// Apply the value recurrence for one scored attempt and return the
    /// updated estimate:
    ///
    /// ```text
    /// q[key] = q.get(key, 0) + lr * (score + gamma * max(q.values(), 0) - q.get(key, 0))
    /// ```
    ///
    /// The max ranges over every value ever stored, not just this run's keys.
    pub fn update(
        &mut self,
        attempt: usize,
        score: f64,
        learning_rate: f64,
        discount_factor: f64,
    ) -> f64 {
        let key = format!("attempt_{attempt}");
        let current = self.table.get(&key).copied().unwrap_or(0.0);
        let max_so_far = self.max_value();

        let updated = current + learning_rate * (score + discount_factor * max_so_far - current);
        self.table.insert(key, updated);

        updated
    }

    /// Largest stored value, 0 for an empty table.
    pub fn max_value(&self) -> f64 {
        if self.table.is_empty() {
            return 0.0;
        }
        self.table
            .values()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.table.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries sorted by key, for display.
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> =
            self.table.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Flush the whole table to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create memory directory: {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.table).context("Failed to serialize attempt memory")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write attempt memory: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_memory() -> (tempfile::TempDir, AttemptMemory) {
        let dir = tempfile::tempdir().unwrap();
        let memory = AttemptMemory::load(dir.path().join("q_memory.json")).unwrap();
        (dir, memory)
    }

    #[test]
    fn test_missing_file_is_empty_table() {
        let (_dir, memory) = scratch_memory();
        assert!(memory.is_empty());
        assert_eq!(memory.max_value(), 0.0);
    }

    #[test]
    fn test_first_update_from_zero() {
        let (_dir, mut memory) = scratch_memory();

        // current = 0, max = 0: updated = 0 + 0.7 * (0.5 + 0.9 * 0 - 0)
        let updated = memory.update(0, 0.5, 0.7, 0.9);
        assert!((updated - 0.35).abs() < 1e-12);
        assert_eq!(memory.get("attempt_0"), Some(updated));
    }

    #[test]
    fn test_update_uses_max_across_all_keys() {
        let (_dir, mut memory) = scratch_memory();

        memory.update(0, 1.0, 0.7, 0.9); // attempt_0 = 0.7
        let updated = memory.update(1, 0.5, 0.7, 0.9);

        // current = 0, max = 0.7: updated = 0.7 * (0.5 + 0.9 * 0.7)
        assert!((updated - 0.7 * (0.5 + 0.9 * 0.7)).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_update_same_key() {
        let (_dir, mut memory) = scratch_memory();

        let first = memory.update(0, 0.5, 0.7, 0.9);
        let second = memory.update(0, 0.5, 0.7, 0.9);

        // current = first, max = first
        let expected = first + 0.7 * (0.5 + 0.9 * first - first);
        assert!((second - expected).abs() < 1e-12);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q_memory.json");

        {
            let mut memory = AttemptMemory::load(&path).unwrap();
            memory.update(0, 0.6, 0.7, 0.9); // attempt_0 = 0.42
            memory.save().unwrap();
        }

        let reloaded = AttemptMemory::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert!((reloaded.get("attempt_0").unwrap() - 0.42).abs() < 1e-12);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("q_memory.json");

        let mut memory = AttemptMemory::load(&path).unwrap();
        memory.update(0, 0.5, 0.7, 0.9);
        memory.save().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_entries_sorted_by_key() {
        let (_dir, mut memory) = scratch_memory();
        memory.update(2, 0.5, 0.7, 0.9);
        memory.update(0, 0.5, 0.7, 0.9);
        memory.update(1, 0.5, 0.7, 0.9);

        let keys: Vec<String> = memory.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["attempt_0", "attempt_1", "attempt_2"]);
    }
}
