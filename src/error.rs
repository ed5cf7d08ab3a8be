use miette::Diagnostic;
use thiserror::Error;

/// Main error type for huffer operations
#[derive(Error, Diagnostic, Debug)]
pub enum HufferError {
    #[error("Invalid canvas dimension: {width}x{height}")]
    #[diagnostic(
        code(huffer::dimension),
        help("Canvas width and height must both be at least 1")
    )]
    InvalidDimension { width: u32, height: u32 },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(huffer::parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(huffer::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(huffer::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(huffer::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, HufferError>;
