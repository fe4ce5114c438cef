//! Tokens command implementation.
//!
//! Scans each input file and prints one line per token. A file stops at its
//! first lexical error; the command fails once all files have been scanned
//! if any of them had an error.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use luffa_lex::{CommentStyle, OwnedToken, Scanner};
use luffa_util::{Diagnostic, Handler, SourceMap};
use serde::Serialize;

use super::common::{describe_subtype, ScannerSettings};
use crate::config::Config;
use crate::error::{LuffatError, Result};

/// How tokens are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:col<TAB>kind<TAB>subtype<TAB>'text'`, one-based positions
    #[default]
    Text,
    /// One JSON object per line with zero-based positions
    Json,
}

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Files to scan, in order
    pub files: Vec<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Comment syntax overriding the configured one
    pub comments: Option<CommentStyle>,
    /// Enable verbose output
    pub verbose: bool,
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    file: &'a str,
    line: u32,
    line_offset: u32,
    byte_offset: usize,
    kind: &'static str,
    subtype: String,
    text: &'a str,
}

/// Run the tokens command, writing to standard output.
pub fn run_tokens(args: TokensArgs, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&args, config, &mut out)
}

/// Scan `args.files` and write their tokens to `out`.
pub fn write_tokens(args: &TokensArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    if args.files.is_empty() {
        return Err(LuffatError::Validation("No input files given".to_string()));
    }

    let settings = ScannerSettings::from_config(&config.scanner, args.comments)?;

    let mut sources = SourceMap::new();
    for path in &args.files {
        sources.load(path)?;
    }

    let handler = Handler::new();
    let mut token = OwnedToken::new();
    for file in sources.iter() {
        let mut scanner = Scanner::with_options(
            file.name(),
            file.bytes(),
            settings.options(file.index()),
            settings.comments,
        )
        .with_handler(&handler);

        let mut count = 0usize;
        while scanner.next_token(&mut token) {
            let name = match token.file_index() {
                Some(index) => sources.file(index)?.name(),
                None => file.name(),
            };
            let kind = token.kind();
            let subtype = describe_subtype(kind, token.subtype(), scanner.punctuation());
            let text = token.text_lossy();

            match args.format {
                OutputFormat::Text => writeln!(
                    out,
                    "{}:{}:{}\t{}\t{}\t'{}'",
                    name,
                    token.line() + 1,
                    token.line_offset() + 1,
                    kind,
                    subtype,
                    text
                )?,
                OutputFormat::Json => {
                    let record = TokenRecord {
                        file: name,
                        line: token.line(),
                        line_offset: token.line_offset(),
                        byte_offset: token.byte_offset(),
                        kind: kind.name(),
                        subtype,
                        text: &text,
                    };
                    serde_json::to_writer(&mut *out, &record)?;
                    writeln!(out)?;
                }
            }
            count += 1;
        }

        if args.verbose {
            tracing::info!(
                "{}: {} tokens in {} lines",
                file.name(),
                count,
                file.line_count()
            );
        }
    }
    out.flush()?;

    let diagnostics = handler.diagnostics();
    for diagnostic in &diagnostics {
        tracing::error!("{}", with_source_line(&sources, diagnostic));
    }

    let mut failed: Vec<_> = diagnostics.iter().filter_map(|d| d.file).collect();
    failed.dedup();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(LuffatError::CommandExecution(format!(
            "{} file(s) had lexical errors",
            failed.len()
        )))
    }
}

/// The diagnostic message followed by the source line it points at.
fn with_source_line(sources: &SourceMap, diagnostic: &Diagnostic) -> String {
    let line = diagnostic
        .file
        .and_then(|index| sources.get(index))
        .and_then(|file| file.line(diagnostic.position.line as usize));
    match line {
        Some(line) => format!(
            "{}\n    | {}",
            diagnostic.message,
            String::from_utf8_lossy(line)
        ),
        None => diagnostic.message.clone(),
    }
}
