use std::{borrow::Cow, error::Error as StdError, io::Error as IoError};

use eyre::Report;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A fixed pattern could not be found in the profile page.
    #[error(
        "the {what} was not found for `{username}`; \
        the provided username may be incorrect or the profile may be private"
    )]
    Extraction {
        username: Box<str>,
        what: &'static str,
    },
    /// JSON was invalid at some decoding step or lacked an expected field.
    #[error("failed to parse {what}")]
    Parse {
        what: Cow<'static, str>,
        #[source]
        source: Option<serde_json::Error>,
    },
    /// An aura action reported a non-success state.
    #[error("aura action failed: {message}")]
    Rpc { message: Box<str> },
    #[error("failed to serialize aura payload")]
    Envelope(#[source] Box<dyn StdError + Send + Sync>),
    #[error("{0:?}")]
    Transport(Report),
    #[error("failed to build runtime")]
    Runtime(#[source] IoError),
}

impl Error {
    pub(crate) fn parse(what: impl Into<Cow<'static, str>>, source: serde_json::Error) -> Self {
        Self::Parse {
            what: what.into(),
            source: Some(source),
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::Parse {
            what: Cow::Owned(format!("response; missing field `{field}`")),
            source: None,
        }
    }
}

impl From<Report> for Error {
    #[inline]
    fn from(report: Report) -> Self {
        Self::Transport(report)
    }
}
