//! Names command implementation.
//!
//! Collects the unique names used across every file with a given extension
//! in a directory. Files are tokenized in parallel; the first occurrence of
//! each name, in file order, is the one reported.

use std::io::{self, Write};
use std::path::PathBuf;

use indexmap::IndexMap;
use luffa_lex::{CommentStyle, OwnedToken, Scanner, TokenKind};
use luffa_util::{Diagnostic, FileIndex, SourceFile, SourceMap};
use rayon::prelude::*;

use super::common::{find_matching_files, ScannerSettings};
use crate::config::Config;
use crate::error::{LuffatError, Result};

/// Arguments for the names command.
#[derive(Debug, Clone)]
pub struct NamesArgs {
    /// Directory to search
    pub dir: PathBuf,
    /// File extension (default: from config)
    pub ext: Option<String>,
    /// Minimum name length (default: from config)
    pub min_length: Option<usize>,
    /// Number of parallel jobs (default: from config)
    pub jobs: Option<u32>,
    /// Comment syntax overriding the configured one
    pub comments: Option<CommentStyle>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Where a name was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occurrence {
    file: FileIndex,
    line: u32,
}

/// Names found in one file, and the lexical error that ended it early.
#[derive(Debug)]
struct FileNames {
    names: Vec<(String, Occurrence)>,
    warning: Option<Diagnostic>,
}

/// Run the names command, writing to standard output.
pub fn run_names(args: NamesArgs, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_names(&args, config, &mut out)
}

/// Collect unique names under `args.dir` and write them to `out`.
pub fn write_names(args: &NamesArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let ext = args.ext.as_deref().unwrap_or(&config.names.extension);
    let min_length = args.min_length.unwrap_or(config.names.min_length);
    let jobs = args.jobs.unwrap_or(config.names.jobs).max(1);
    let settings = ScannerSettings::from_config(&config.scanner, args.comments)?;

    let files = find_matching_files(&args.dir, ext)?;
    if files.is_empty() {
        tracing::warn!(
            "No .{} files found in {}",
            ext.trim_start_matches('.'),
            args.dir.display()
        );
    }

    let mut sources = SourceMap::new();
    for path in &files {
        sources.load(path)?;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs as usize)
        .build()
        .map_err(|e| LuffatError::CommandExecution(format!("Failed to start workers: {}", e)))?;

    let files: Vec<&SourceFile> = sources.iter().collect();
    let per_file: Vec<FileNames> = pool.install(|| {
        files
            .par_iter()
            .map(|file| collect_names(file, &settings, min_length))
            .collect()
    });

    let mut unique: IndexMap<String, Occurrence> = IndexMap::new();
    for found in per_file {
        if let Some(warning) = &found.warning {
            tracing::warn!("{}", warning);
        }
        for (name, occurrence) in found.names {
            unique.entry(name).or_insert(occurrence);
        }
    }

    if args.verbose {
        tracing::info!("{} unique names in {} files", unique.len(), sources.len());
    }

    for (name, occurrence) in &unique {
        let file = sources.file(occurrence.file)?;
        writeln!(out, "{}\t{}:{}", name, file.name(), occurrence.line + 1)?;
    }
    out.flush()?;
    Ok(())
}

/// Name tokens of one file in source order.
///
/// A lexical error ends the file early; names found before it are kept and
/// the error comes back as a warning.
fn collect_names(file: &SourceFile, settings: &ScannerSettings, min_length: usize) -> FileNames {
    let mut scanner = Scanner::with_options(
        file.name(),
        file.bytes(),
        settings.options(file.index()),
        settings.comments,
    );
    let mut token = OwnedToken::new();
    let mut names = Vec::new();

    while scanner.next_token(&mut token) {
        if token.kind() != TokenKind::Name || token.text().len() < min_length {
            continue;
        }
        names.push((
            token.text_lossy().into_owned(),
            Occurrence {
                file: file.index(),
                line: token.line(),
            },
        ));
    }

    let warning = scanner.error().map(|message| {
        Diagnostic::warning(message, scanner.position()).with_file(Some(file.index()))
    });
    tracing::info!("Found {} words in {}", names.len(), file.name());
    FileNames { names, warning }
}
