//! On-disk store for puzzle inputs

use crate::error::StoreError;
use std::fs;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory layout: `{base_dir}/day{DD}/input.txt`, with an optional
/// per-part override `input{part}.txt` that wins when present.
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    /// Create a store rooted at the given directory
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Shared input path for a day
    pub fn day_path(&self, day: u8) -> PathBuf {
        self.base_dir
            .join(format!("day{:02}", day))
            .join("input.txt")
    }

    /// Part-specific override path for a day
    pub fn part_path(&self, day: u8, part: u8) -> PathBuf {
        self.base_dir
            .join(format!("day{:02}", day))
            .join(format!("input{}.txt", part))
    }

    /// Load the input for a day and part
    ///
    /// The part-specific file is preferred, the shared day file is the
    /// fallback. One full read of the file, no caching.
    pub fn load(&self, day: u8, part: u8) -> Result<String, StoreError> {
        let override_path = self.part_path(day, part);
        if override_path.exists() {
            return Ok(fs::read_to_string(&override_path)?);
        }

        let path = self.day_path(day);
        if !path.exists() {
            return Err(StoreError::Missing(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        assert_eq!(store.day_path(1), PathBuf::from("inputs/day01/input.txt"));
        assert_eq!(store.day_path(12), PathBuf::from("inputs/day12/input.txt"));
        assert_eq!(
            store.part_path(3, 2),
            PathBuf::from("inputs/day03/input2.txt")
        );
    }

    #[test]
    fn test_missing_input_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let err = store.load(1, 1).unwrap_err();
        assert!(matches!(err, StoreError::Missing(_)));
    }

    #[test]
    fn test_shared_input_is_the_fallback() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let day_dir = temp.path().join("day01");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), "L44\nR35\nR4\n").unwrap();

        assert_eq!(store.load(1, 1).unwrap(), "L44\nR35\nR4\n");
        assert_eq!(store.load(1, 2).unwrap(), "L44\nR35\nR4\n");
    }

    #[test]
    fn test_part_override_wins() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let day_dir = temp.path().join("day01");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), "shared\n").unwrap();
        fs::write(day_dir.join("input2.txt"), "override\n").unwrap();

        assert_eq!(store.load(1, 1).unwrap(), "shared\n");
        assert_eq!(store.load(1, 2).unwrap(), "override\n");
    }
}
