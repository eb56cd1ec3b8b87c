use miette::Diagnostic;
use thiserror::Error;

/// Main error type for resgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum ResgenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(resgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(resgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(resgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(resgen::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{count} generated file(s) are out of date")]
    #[diagnostic(
        code(resgen::stale),
        help("Run `resgen generate` to update them")
    )]
    Stale { count: usize },

    /// A generator handed over a fragment that breaks the fragment contract.
    #[error("Internal consistency error at '{path}': {invariant}")]
    #[diagnostic(
        code(resgen::internal),
        help("This is a bug in a resource generator, not in your resources")
    )]
    InternalConsistency { invariant: String, path: String },
}

pub type Result<T> = std::result::Result<T, ResgenError>;
