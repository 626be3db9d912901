use crate::errors::Result;
use crate::structs::{Author, ParsedLink, ResolvedAttachment, ResolvedEmbed, ResolvedMessage};
use crate::utils::convert_serenity_datetime;

use async_trait::async_trait;
use feed::Lookup;
use log::{debug, warn};
use reqwest::StatusCode;
use serenity::model::channel::Message;
use serenity::model::id::GuildId;
use serenity::model::user::User;
use serenity::prelude::{Context, HttpError, SerenityError};

/// Fetches past messages by id. A deleted message, or one in a channel the bot
/// can't read, is `Lookup::NotFound`; only transport problems are errors.
#[async_trait]
pub trait MessageLookup: Send + Sync {
    async fn fetch_message(&self, link: &ParsedLink) -> Result<Lookup<ResolvedMessage>>;
}

pub struct HttpLookup<'a> {
    ctx: &'a Context,
}

impl<'a> HttpLookup<'a> {
    pub const fn new(ctx: &'a Context) -> HttpLookup<'a> {
        HttpLookup { ctx }
    }

    async fn author(&self, user: &User, guild: GuildId) -> Author {
        let nickname = user.nick_in(self.ctx, guild).await;
        Author {
            display_name: nickname.unwrap_or_else(|| user.name.clone()),
            username: user.name.clone(),
            avatar_url: user.face(),
        }
    }

    async fn snapshot(
        &self,
        message: &Message,
        guild: GuildId,
        referenced: Option<Box<ResolvedMessage>>,
    ) -> ResolvedMessage {
        let timestamp = match convert_serenity_datetime(message.timestamp) {
            Ok(timestamp) => Some(timestamp),
            Err(why) => {
                warn!("dropping timestamp of message {}: {why}", message.id);
                None
            }
        };

        ResolvedMessage {
            author: self.author(&message.author, guild).await,
            content: message.content.clone(),
            timestamp,
            // fetched messages carry no guild id, so `Message::link` would point at @me
            jump_url: message.id.link(message.channel_id, Some(guild)),
            attachments: message.attachments.iter().map(ResolvedAttachment::from).collect(),
            embeds: message.embeds.iter().map(ResolvedEmbed::from).collect(),
            referenced,
        }
    }

    async fn resolve(&self, message: &Message, guild: GuildId) -> ResolvedMessage {
        let referenced = match message.referenced_message.as_deref() {
            Some(parent) => Some(Box::new(self.snapshot(parent, guild, None).await)),
            None => None,
        };
        self.snapshot(message, guild, referenced).await
    }
}

#[async_trait]
impl MessageLookup for HttpLookup<'_> {
    async fn fetch_message(&self, link: &ParsedLink) -> Result<Lookup<ResolvedMessage>> {
        let message = match link
            .channel_id()
            .message(self.ctx, link.message_id())
            .await
        {
            Ok(message) => message,
            Err(why) if is_missing(&why) => {
                debug!("message {} is gone or hidden from us: {why}", link.uri());
                return Ok(Lookup::NotFound);
            }
            Err(why) => return Err(why.into()),
        };

        Ok(Lookup::Found(self.resolve(&message, link.guild_id()).await))
    }
}

fn is_missing(err: &SerenityError) -> bool {
    match err {
        SerenityError::Http(http_err) => match http_err.as_ref() {
            HttpError::UnsuccessfulRequest(response) => is_missing_status(response.status_code),
            _ => false,
        },
        _ => false,
    }
}

// Discord answers 403 for channels the bot lost access to
#[inline]
fn is_missing_status(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN
}
