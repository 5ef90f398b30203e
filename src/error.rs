use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unbalanced quotes in value: {0}")]
    MalformedValue(String),

    #[error("expected key=value, got: {0}")]
    MalformedLine(String),

    #[error("{program}: {reason}")]
    Command { program: String, reason: String },
}

impl Error {
    pub fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            source,
        }
    }

    pub fn command(program: &str, reason: impl Into<String>) -> Self {
        Self::Command {
            program: program.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
