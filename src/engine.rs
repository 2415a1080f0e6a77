// Engine - part of the library surface, not all reached from the binary
#![allow(dead_code)]

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::discovery::SourceFile;
use crate::parser::{package_name, GoParser, ParsedFile};
use crate::rules::{Rule, RuleContext};
use miette::Result;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One Go package: every parsed `.go` file sharing a directory.
///
/// Rules analyze one package at a time and never look across packages.
#[derive(Debug)]
pub struct GoPackage {
    /// Directory the package lives in
    pub dir: PathBuf,

    /// Package name from the `package` clause (directory name fallback)
    pub name: String,

    /// All files of the package, test files included
    pub files: Vec<ParsedFile>,
}

impl GoPackage {
    pub fn new(name: impl Into<String>, files: Vec<ParsedFile>) -> Self {
        let dir = files
            .first()
            .and_then(|f| f.path.parent())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            dir,
            name: name.into(),
            files,
        }
    }
}

/// Drives discovery output through parsing, package grouping, and rules
pub struct Engine<'a> {
    config: &'a Config,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Parse files sequentially, failing the run on the first unreadable
    /// or unparseable file. Rules never see a half-parsed package.
    pub fn parse_files(&self, files: &[SourceFile]) -> Result<Vec<ParsedFile>> {
        let mut parser = GoParser::new();
        let mut parsed = Vec::with_capacity(files.len());

        for file in files {
            let contents = file.read_contents()?;
            parsed.push(parser.parse(&file.path, &contents)?);
        }

        Ok(parsed)
    }

    /// Parse files in parallel with one parser per file
    pub fn parse_files_parallel(&self, files: &[SourceFile]) -> Result<Vec<ParsedFile>> {
        info!("Parsing {} files in parallel...", files.len());

        let results: Vec<Result<ParsedFile>> = files
            .par_iter()
            .map(|file| {
                let contents = file.read_contents()?;
                GoParser::new().parse(&file.path, &contents)
            })
            .collect();

        let mut parsed = Vec::with_capacity(results.len());
        for result in results {
            parsed.push(result?);
        }

        Ok(parsed)
    }

    /// Group parsed files by directory into Go packages
    pub fn group_packages(&self, parsed: Vec<ParsedFile>) -> Vec<GoPackage> {
        let mut by_dir: BTreeMap<PathBuf, Vec<ParsedFile>> = BTreeMap::new();
        for file in parsed {
            let dir = file
                .path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            by_dir.entry(dir).or_default().push(file);
        }

        by_dir
            .into_iter()
            .map(|(dir, files)| {
                let name = files.iter().find_map(package_name).unwrap_or_else(|| {
                    dir.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "main".to_string())
                });
                GoPackage { dir, name, files }
            })
            .collect()
    }

    /// Run every rule over every package, collecting into one sink.
    ///
    /// All indexes a rule builds live inside its check call; nothing is
    /// carried from one package or run to the next.
    pub fn run(&self, packages: &[GoPackage], rules: &[Box<dyn Rule>]) -> Diagnostics {
        let ctx = RuleContext {
            config: self.config,
        };
        let mut sink = Diagnostics::new();

        for pkg in packages {
            debug!(
                "Analyzing package '{}' ({} files)",
                pkg.name,
                pkg.files.len()
            );
            for rule in rules {
                rule.check(pkg, &ctx, &mut sink);
            }
        }

        sink
    }
}
