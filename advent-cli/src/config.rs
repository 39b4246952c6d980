//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding the puzzle input files
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(
            expand_tilde(Path::new("/var/puzzles")),
            PathBuf::from("/var/puzzles")
        );
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/puzzles")), home.join("puzzles"));
        }
    }
}
