use thiserror::Error;

/// Errors raised by structural operations on an [`crate::album::AlbumTree`].
///
/// The composite contract is uniform over sets and photos, so illegal
/// operations surface as values instead of console messages.
#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("cannot add to photo '{0}'")]
    PhotoCannotContain(String),

    #[error("cannot remove from photo '{0}'")]
    PhotoCannotRelease(String),

    #[error("node reference is no longer valid")]
    StaleNode,
}

pub type AlbumResult<T> = Result<T, AlbumError>;

/// Errors raised while reading and executing a command script.
///
/// Line-level variants carry the 1-based line number. The runner surfaces
/// them as per-line warnings and keeps going; only `MissingQuit` and `Io`
/// abort a run.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: blank line")]
    BlankLine { line: usize },

    #[error("line {line}: unknown command '{token}'")]
    UnknownCommand { line: usize, token: String },

    #[error("line {line}: {command} requires a name parameter")]
    MissingParameter { line: usize, command: &'static str },

    #[error("script ended without Quit")]
    MissingQuit,

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors raised while loading layered settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {reason}")]
    Read {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error("parse {path}: {reason}")]
    Parse {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error("config: {0}")]
    Message(String),
}
