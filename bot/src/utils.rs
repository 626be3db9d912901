//! Conversions between serenity's own `Timestamp` and chrono.
//!
//! Serenity wraps its timestamps in an internal type, the rest of the bot works
//! with plain `DateTime<Utc>`. Both directions go through RFC 3339 strings, which
//! is silly but keeps us off serenity's internals.

use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use log::trace;
use serenity::model::Timestamp;

#[inline(always)]
pub fn convert_serenity_datetime(serenity_dt: Timestamp) -> Result<DateTime<Utc>> {
    let datetime_str = serenity_dt.to_rfc3339();
    trace!("rfc3339 datetime str is {datetime_str}");

    DateTime::parse_from_rfc3339(&datetime_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| Error::Internal(format!("Datetime couldn't be converted with err {err:?}")))
}

#[inline]
pub fn to_serenity_timestamp(datetime: &DateTime<Utc>) -> Option<Timestamp> {
    Timestamp::parse(&datetime.to_rfc3339()).ok()
}
