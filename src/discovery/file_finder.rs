// File discovery utilities - part of the library surface, not all reached from the binary
#![allow(dead_code)]

use crate::config::Config;
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Whether a path follows Go's `_test.go` filename convention.
///
/// Test files never contribute declarations or usage evidence to the
/// rules; they are still discovered so packages keep their full file set.
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with("_test.go"))
        .unwrap_or(false)
}

/// Represents a discovered Go source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Whether the filename ends in `_test.go`
    pub is_test: bool,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        let is_test = is_test_file(&path);
        Self { path, is_test }
    }

    /// Load and return owned contents
    pub fn read_contents(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).into_diagnostic()
    }
}

/// File finder for discovering Go source files in a project
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all Go source files in the given path
    pub fn find_files(&self, root: &Path) -> Result<Vec<SourceFile>> {
        debug!("Scanning for files in: {}", root.display());

        let targets = if self.config.targets.is_empty() {
            vec![root.to_path_buf()]
        } else {
            self.config.targets.iter().map(|t| root.join(t)).collect()
        };

        let files: Vec<SourceFile> = targets
            .par_iter()
            .flat_map(|target| self.scan_directory(target))
            .collect();

        debug!("Found {} Go files", files.len());
        Ok(files)
    }

    /// Scan a single directory for Go source files
    fn scan_directory(&self, dir: &Path) -> Vec<SourceFile> {
        if !dir.exists() {
            trace!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }

        let walker = WalkBuilder::new(dir)
            .hidden(true)        // Skip hidden files
            .git_ignore(true)    // Respect .gitignore
            .git_global(true)    // Respect global gitignore
            .git_exclude(true)   // Respect .git/info/exclude
            .ignore(true)        // Respect .ignore files
            .parents(true)       // Check parent directories for ignore files
            .follow_links(false) // Don't follow symlinks
            .build();

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| {
                let path = entry.path();

                if path.extension().and_then(|e| e.to_str()) != Some("go") {
                    return None;
                }

                // Check exclusion patterns
                if self.config.should_exclude(path) {
                    trace!("Excluding: {}", path.display());
                    return None;
                }

                trace!("Found: {}", path.display());
                Some(SourceFile::new(path.to_path_buf()))
            })
            .collect()
    }
}

/// Statistics about discovered files
#[derive(Debug, Default)]
pub struct FileStats {
    pub production_files: usize,
    pub test_files: usize,
}

impl FileStats {
    pub fn from_files(files: &[SourceFile]) -> Self {
        let mut stats = Self::default();
        for file in files {
            if file.is_test {
                stats.test_files += 1;
            } else {
                stats.production_files += 1;
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.production_files + self.test_files
    }
}
