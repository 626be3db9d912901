use reqwest::StatusCode;

use std::{
    error::Error as StdError,
    fmt::{self, Display},
    result,
};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    Status(StatusCode),
    Decode(serde_json::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Reqwest(inner) => fmt::Display::fmt(&inner, f),
            Error::Status(status) => write!(f, "backend responded with {status}"),
            Error::Decode(inner) => write!(f, "malformed backend response: {inner}"),
        }
    }
}

impl StdError for Error {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Decode(e)
    }
}
