use crate::errors::{Error, Result};

use serenity::model::id::{ChannelId, GuildId, MessageId};
use std::str::FromStr;

// https://discord.com/channels/<guild>/<channel>/<message>
//   0   1      2         3       4        5         6
const GUILD_SEGMENT: usize = 4;
const CHANNEL_SEGMENT: usize = 5;
const MESSAGE_SEGMENT: usize = 6;
const SEGMENT_COUNT: usize = 7;

/// The snowflakes packed into a message jump link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedLink {
    pub guild: u64,
    pub channel: u64,
    pub message: u64,
}

impl ParsedLink {
    pub const fn new(guild: u64, channel: u64, message: u64) -> ParsedLink {
        ParsedLink {
            guild,
            channel,
            message,
        }
    }

    /// Decodes a jump link. Surrounding whitespace and a single trailing `/` are
    /// tolerated, anything else that isn't exactly seven segments with numeric
    /// ids in the last three is malformed.
    pub fn parse(link: &str) -> Result<ParsedLink> {
        let trimmed = link.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() != SEGMENT_COUNT {
            return Err(Error::MalformedLink(link.to_string()));
        }

        let snowflake = |index: usize| {
            parse_snowflake(segments[index]).ok_or_else(|| Error::MalformedLink(link.to_string()))
        };

        Ok(ParsedLink::new(
            snowflake(GUILD_SEGMENT)?,
            snowflake(CHANNEL_SEGMENT)?,
            snowflake(MESSAGE_SEGMENT)?,
        ))
    }

    #[inline(always)]
    pub const fn guild_id(&self) -> GuildId {
        GuildId(self.guild)
    }

    #[inline(always)]
    pub const fn channel_id(&self) -> ChannelId {
        ChannelId(self.channel)
    }

    #[inline(always)]
    pub const fn message_id(&self) -> MessageId {
        MessageId(self.message)
    }

    /// Returns the canonical jump link for these ids.
    #[inline]
    pub fn uri(&self) -> String {
        self.message_id()
            .link(self.channel_id(), Some(self.guild_id()))
    }
}

impl FromStr for ParsedLink {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ParsedLink::parse(s)
    }
}

// u64::from_str accepts a leading '+', ids never carry one
fn parse_snowflake(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
