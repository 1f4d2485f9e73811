use std::{ops::Deref, string::FromUtf8Error};

use bytes::Bytes;
use eyre::{Report, Result};

/// UTF-8 text of a fetched page.
#[derive(Debug)]
pub struct PageText(String);

impl PageText {
    pub fn new(bytes: Bytes) -> Result<Self> {
        Self::try_from(bytes)
    }
}

impl TryFrom<Bytes> for PageText {
    type Error = Report;

    fn try_from(bytes: Bytes) -> Result<Self, Self::Error> {
        String::from_utf8(bytes.into())
            .map(Self)
            .map_err(FromUtf8Error::into_bytes)
            .map_err(|bytes| eyre!("received invalid UTF-8 page ({} bytes)", bytes.len()))
    }
}

impl Deref for PageText {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
