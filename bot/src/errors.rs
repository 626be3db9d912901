use std::{
    error::Error as StdError,
    fmt::{self, Display},
    result,
};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Serenity(serenity::Error),
    /// The ranked feed could not be fetched or decoded. Fatal for the whole batch.
    FeedUnavailable(feed::Error),
    /// The nomination's link does not decode to guild/channel/message ids.
    MalformedLink(String),
    /// The nominated message, or its channel, is gone or not visible to the bot.
    MessageResolution(String),
    Internal(String),
    ConstStr(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Serenity(inner) => fmt::Display::fmt(&inner, f),
            Error::FeedUnavailable(inner) => write!(f, "nomination feed unavailable: {inner}"),
            Error::MalformedLink(link) => write!(f, "malformed message link {link:?}"),
            Error::MessageResolution(link) => write!(f, "could not resolve message {link}"),
            Error::Internal(inner) => f.write_str(inner),
            Error::ConstStr(inner) => f.write_str(inner),
        }
    }
}

impl StdError for Error {}

impl From<serenity::Error> for Error {
    fn from(e: serenity::Error) -> Error {
        Error::Serenity(e)
    }
}

impl From<feed::Error> for Error {
    fn from(e: feed::Error) -> Error {
        Error::FeedUnavailable(e)
    }
}
