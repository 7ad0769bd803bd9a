use thiserror::Error;

/// Errors raised while parsing, aggregating or selecting conferences.
#[derive(Debug, Error)]
pub enum ConferenceError {
    #[error("Malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Win ratio undefined for {team:?}: no games played")]
    DivisionUndefined { team: String },

    #[error("Conference {0:?} has no teams")]
    EmptyConference(String),

    #[error("Unknown conference: {0:?}")]
    UnknownConference(String),

    #[error("No conferences to select from")]
    NoConferences,

    #[error("Could not open file {path}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_no}: {source}")]
    AtLine {
        line_no: usize,
        #[source]
        source: Box<ConferenceError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConferenceError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        ConferenceError::MalformedRecord {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Strip any `AtLine` wrappers and return the underlying error.
    pub fn root(&self) -> &ConferenceError {
        match self {
            ConferenceError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConferenceError>;
