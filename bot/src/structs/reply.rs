use super::display::{LinkButton, RenderedComment};
use crate::errors::Result;

use async_trait::async_trait;
use log::debug;
use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::prelude::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Posted in the channel the command was used in.
    Public,
    /// Shown only to the user who asked.
    Ephemeral,
}

impl Visibility {
    #[inline]
    pub const fn from_ephemeral(ephemeral: bool) -> Visibility {
        if ephemeral {
            Visibility::Ephemeral
        } else {
            Visibility::Public
        }
    }

    #[inline]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Visibility::Ephemeral)
    }
}

/// Where rendered comments end up.
#[async_trait]
pub trait Outlet: Send + Sync {
    async fn post_public(&self, comment: &RenderedComment) -> Result<()>;

    async fn post_private(&self, comment: &RenderedComment) -> Result<()>;

    /// Plain text shown only to the requester.
    async fn acknowledge(&self, text: &str) -> Result<()>;
}

/// Replies to a slash command, either in its channel or as ephemeral follow-ups.
/// The interaction must already be deferred.
pub struct Reply<'a> {
    ctx: &'a Context,
    command: &'a ApplicationCommandInteraction,
}

impl<'a> Reply<'a> {
    pub const fn new(ctx: &'a Context, command: &'a ApplicationCommandInteraction) -> Reply<'a> {
        Reply { ctx, command }
    }
}

#[async_trait]
impl Outlet for Reply<'_> {
    async fn post_public(&self, comment: &RenderedComment) -> Result<()> {
        let embeds = comment.embeds();
        debug!(
            "posting {} embeds for {} to channel {}",
            embeds.len(),
            comment.button.url,
            self.command.channel_id
        );
        self.command
            .channel_id
            .send_message(&self.ctx.http, |m| {
                m.set_embeds(embeds)
                    .components(|c| link_button_row(c, &comment.button))
            })
            .await?;
        Ok(())
    }

    async fn post_private(&self, comment: &RenderedComment) -> Result<()> {
        let embeds = comment.embeds();
        debug!(
            "sending {} embeds for {} to {}",
            embeds.len(),
            comment.button.url,
            self.command.user.name
        );
        self.command
            .create_followup_message(&self.ctx.http, |f| {
                f.ephemeral(true)
                    .add_embeds(embeds)
                    .components(|c| link_button_row(c, &comment.button))
            })
            .await?;
        Ok(())
    }

    async fn acknowledge(&self, text: &str) -> Result<()> {
        self.command
            .create_followup_message(&self.ctx.http, |f| f.ephemeral(true).content(text))
            .await?;
        Ok(())
    }
}

fn link_button_row<'c>(
    components: &'c mut CreateComponents,
    button: &LinkButton,
) -> &'c mut CreateComponents {
    components.create_action_row(|row| {
        row.create_button(|b| b.style(ButtonStyle::Link).label(button.label).url(&button.url))
    })
}
