//! Start-up configuration, read once from the environment.
//!
//! | variable          | required | meaning                                              |
//! |-------------------|----------|------------------------------------------------------|
//! | `DISCORD_TOKEN`   | yes      | bot token                                            |
//! | `GUILD_ID`        | no       | register commands on this guild only (else globally) |
//! | `FEED_BASE_URL`   | no       | base url of the comments backend                     |
//! | `POST_PALETTE`    | no       | comma separated `#RRGGBB` colours for post pairing   |

use crate::errors::{Error, Result};
use crate::structs::colours::DEFAULT_PALETTE;

use serenity::model::id::GuildId;
use serenity::utils::Colour;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub guild_id: Option<GuildId>,
    pub feed_base_url: String,
    pub palette: Vec<Colour>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(var: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = var("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(Error::ConstStr("Expected DISCORD_TOKEN in the environment"))?;

        let guild_id = match var("GUILD_ID") {
            Some(raw) => Some(GuildId(raw.trim().parse::<u64>().map_err(|_| {
                Error::Internal(format!("GUILD_ID {raw:?} is not a valid guild id"))
            })?)),
            None => None,
        };

        let feed_base_url = var("FEED_BASE_URL").unwrap_or_else(|| feed::DEFAULT_BASE_URL.to_string());

        let palette = match var("POST_PALETTE") {
            Some(raw) => parse_palette(&raw)?,
            None => DEFAULT_PALETTE.to_vec(),
        };

        Ok(Config {
            token,
            guild_id,
            feed_base_url,
            palette,
        })
    }
}

pub fn parse_palette(raw: &str) -> Result<Vec<Colour>> {
    let palette = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_colour)
        .collect::<Result<Vec<Colour>>>()?;

    if palette.is_empty() {
        return Err(Error::ConstStr("POST_PALETTE must contain at least one colour"));
    }
    Ok(palette)
}

fn parse_colour(raw: &str) -> Result<Colour> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Internal(format!("invalid colour {raw:?} in POST_PALETTE")));
    }
    u32::from_str_radix(hex, 16)
        .map(Colour)
        .map_err(|_| Error::Internal(format!("invalid colour {raw:?} in POST_PALETTE")))
}
