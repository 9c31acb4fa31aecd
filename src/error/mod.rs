mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_with_color;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApkFileError {
    #[error("{0} is not a valid arch")]
    InvalidArch(String),

    #[error("{0} is not a valid repo")]
    InvalidRepo(String),

    #[error("must pass a file to search for")]
    MissingFile,

    #[error("requesting {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("requesting {url} failed: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("reading response from {url} failed: {source}")]
    ResponseBody {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("response from {url} is not valid UTF-8: {source}")]
    InvalidEncoding {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Only reachable if the CSS selector constants of the extractor are edited
    /// into something invalid.
    #[error("creating document failed: {0}")]
    Document(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApkFileError>;
