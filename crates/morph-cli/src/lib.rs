// morph-cli: configuration, logging and the read/persist pipeline behind
// the `morph` binary.

use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::thread;

use morph_decode::corpus::wlc::Versification;
use morph_decode::{BookError, BookSource, DecodedBook, ErrorClass, MorphEngine};
use morph_sink::{JsonLinesSink, PrintFormat, PrintSink, RetryPolicy, Sink, SinkError, persist_book};
use tracing::{Level, error, info};

/// Source directory variable.
pub const SOURCE_VAR: &str = "SOURCE";

/// Debug logging switch.
pub const VERBOSE_VAR: &str = "VERBOSE";

/// Logical table name given to the sink.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

const DEFAULT_OUTPUT: &str = "./output";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which corpus to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Gnt,
    Wlc,
}

impl Mode {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "gnt" => Ok(Mode::Gnt),
            "wlc" => Ok(Mode::Wlc),
            other => Err(format!("unknown mode {other:?} (expected gnt or wlc)")),
        }
    }

    pub fn default_source(self) -> &'static str {
        match self {
            Mode::Gnt => "./morphgnt/",
            Mode::Wlc => "./morphhb/",
        }
    }

    pub fn default_table(self) -> &'static str {
        match self {
            Mode::Gnt => "morphgnt",
            Mode::Wlc => "morphwlc",
        }
    }
}

/// Persistence backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    JsonLines,
    Print,
}

impl SinkKind {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "jsonl" => Ok(SinkKind::JsonLines),
            "print" => Ok(SinkKind::Print),
            other => Err(format!("unknown sink {other:?} (expected jsonl or print)")),
        }
    }
}

/// Run configuration from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub versification: Versification,
    pub sink: SinkKind,
    pub output: PathBuf,
    pub flat: bool,
    pub source: PathBuf,
    pub table: String,
    pub verbose: bool,
}

impl Config {
    /// Build the configuration from command-line `args` (program name
    /// excluded) and an environment lookup.
    pub fn from_args<F>(args: &[String], env: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut mode = None;
        let mut style = None;
        let mut sink = SinkKind::JsonLines;
        let mut output = PathBuf::from(DEFAULT_OUTPUT);
        let mut flat = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) if f.starts_with("--") => (f, Some(v.to_string())),
                _ => (arg.as_str(), None),
            };
            let mut value = || {
                inline
                    .clone()
                    .or_else(|| iter.next().cloned())
                    .ok_or_else(|| format!("{flag} requires a value"))
            };
            match flag {
                "--mode" | "-m" => mode = Some(Mode::parse(&value()?)?),
                "--style" | "-s" => style = Some(value()?),
                "--sink" => sink = SinkKind::parse(&value()?)?,
                "--output" | "-o" => output = PathBuf::from(value()?),
                "--flat" => flat = true,
                other => return Err(format!("unexpected argument {other:?}")),
            }
        }

        let mode = mode.ok_or("--mode is required: gnt|wlc")?;
        let source = env(SOURCE_VAR)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| mode.default_source().to_string());
        let table = env(TABLE_NAME_VAR)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| mode.default_table().to_string());
        let verbose = env(VERBOSE_VAR).is_some_and(|v| parse_bool(&v));

        Ok(Self {
            mode,
            versification: style
                .as_deref()
                .map(Versification::from_style)
                .unwrap_or_default(),
            sink,
            output,
            flat,
            source: PathBuf::from(source),
            table,
            verbose,
        })
    }

    /// Directory holding the book files for this run.
    pub fn source_dir(&self) -> PathBuf {
        match self.mode {
            Mode::Gnt => self.source.clone(),
            Mode::Wlc => self.versification.source_dir(&self.source),
        }
    }

    pub fn print_format(&self) -> PrintFormat {
        if self.flat {
            PrintFormat::Flat
        } else {
            PrintFormat::Json
        }
    }

    pub fn build_sink(&self) -> Box<dyn Sink> {
        match self.sink {
            SinkKind::JsonLines => Box::new(JsonLinesSink::new(&self.output, &self.table)),
            SinkKind::Print => Box::new(PrintSink::stdout(self.print_format())),
        }
    }
}

/// `1`, `t`, `true` in any case; everything else is false.
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true")
}

/// Find the book files for `config`.
pub fn scan_sources(config: &Config) -> Result<Vec<BookSource>, String> {
    let dir = config.source_dir();
    let scanned = match config.mode {
        Mode::Gnt => morph_decode::corpus::gnt::scan(&dir),
        Mode::Wlc => morph_decode::corpus::wlc::scan(&dir),
    };
    scanned.map_err(|e| format!("cannot scan {}: {e}", dir.display()))
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber: DEBUG when verbose, INFO otherwise.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!(error = %error, "log subscriber already initialized");
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Error that stops a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("configuration error in {0}")]
    Configuration(BookError),
    #[error("failed to persist {book}: {source}")]
    Sink {
        book: String,
        #[source]
        source: SinkError,
    },
    #[error("failed to finish persisting: {0}")]
    Finish(#[source] SinkError),
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub books: usize,
    pub words: usize,
    /// Books skipped because their source was corrupt.
    pub failed: Vec<String>,
}

/// Decode `sources` on a reader thread and persist each book, in order, on
/// the calling thread.
///
/// A structural error skips its book; a configuration error or a sink
/// failure stops the run.
pub fn run(
    engine: &MorphEngine,
    sources: Vec<BookSource>,
    sink: &mut dyn Sink,
    policy: &RetryPolicy,
) -> Result<RunSummary, RunError> {
    let (tx, rx) = mpsc::sync_channel::<Result<DecodedBook, BookError>>(1);
    let summary = thread::scope(|s| {
        s.spawn(move || {
            for source in sources {
                // the consumer hung up after a fatal error
                if tx.send(engine.decode_book(source)).is_err() {
                    break;
                }
            }
        });
        persist_all(rx, sink, policy)
    })?;
    sink.finish().map_err(RunError::Finish)?;
    Ok(summary)
}

fn persist_all(
    rx: mpsc::Receiver<Result<DecodedBook, BookError>>,
    sink: &mut dyn Sink,
    policy: &RetryPolicy,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();
    for item in rx {
        match item {
            Ok(decoded) => {
                let name = decoded.source.book.name;
                persist_book(sink, name, &decoded.words, policy).map_err(|source| {
                    RunError::Sink {
                        book: name.to_string(),
                        source,
                    }
                })?;
                summary.books += 1;
                summary.words += decoded.words.len();
            }
            Err(e) if e.class() == ErrorClass::Configuration => {
                return Err(RunError::Configuration(e));
            }
            Err(e) => {
                error!(book = e.book.name, error = %e.error, "skipping book");
                summary.failed.push(e.book.name.to_string());
            }
        }
    }
    info!(books = summary.books, words = summary.words, "done");
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
