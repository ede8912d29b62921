use thiserror::Error;

/// Why a single data line could not be turned into a movie record.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("title is empty")]
    EmptyTitle,

    #[error("year `{0}` is not an integer")]
    InvalidYear(String),

    #[error("rating `{0}` is not a finite number")]
    InvalidRating(String),
}

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {source}")]
    Parse { line: u64, source: ParseError },

    /// The line could be read but was not valid text (e.g. not UTF-8).
    #[error("Malformed input on line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

impl From<csv::Error> for MovieError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(e) => MovieError::Io(e),
            kind => MovieError::Malformed {
                line,
                reason: format!("{:?}", kind),
            },
        }
    }
}

impl MovieError {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MovieError::Parse { .. } | MovieError::Malformed { .. })
    }

    /// Moves a reported line number down by `offset` lines; other errors are unchanged.
    pub(crate) fn shift_line(self, offset: u64) -> Self {
        match self {
            MovieError::Parse { line, source } => MovieError::Parse {
                line: line + offset,
                source,
            },
            MovieError::Malformed { line, reason } => MovieError::Malformed {
                line: line + offset,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieError>;
