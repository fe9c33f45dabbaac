//! Path resolution for focal configuration and data files.
//!
//! All focal data is stored in `~/.focal/`:
//! - `config.yaml` - Main configuration file
//! - `sessions.json` - Recorded focus sessions (flat JSON list)

use std::path::PathBuf;

use crate::error::FocalError;

/// Paths to focal configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focal/`
    pub root: PathBuf,
    /// Config file: `~/.focal/config.yaml`
    pub config_file: PathBuf,
    /// Session log: `~/.focal/sessions.json`
    pub sessions: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FocalError> {
        let home = std::env::var("HOME")
            .map_err(|_| FocalError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".focal")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            sessions: root.join("sessions.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocalError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FocalError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".focal"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-focal");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.sessions, root.join("sessions.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("focal"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
