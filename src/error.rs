use std::io;
use std::path::PathBuf;

/// Errors returned by lexicon operations. Lookup misses are not errors,
/// they come back as `false`.
#[derive(thiserror::Error, Debug)]
pub enum LexiconError {
    #[error("max distance must be non-negative, got {0}")]
    InvalidArgument(isize),
    #[error("could not read word list {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read word list: {0}")]
    ReadFailed(#[source] io::Error),
    #[error("pattern has {len} characters, limit is {max}")]
    PatternTooLong { len: usize, max: usize },
    #[error("malformed snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
