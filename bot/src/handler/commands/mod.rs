mod comment;
mod top_comments;

use super::Handler;
use crate::errors::{Error, Result};
use crate::structs::{Outlet, Reply, Visibility};

use log::{debug, error};
use serenity::builder::{CreateApplicationCommand, CreateApplicationCommands};
use serenity::model::application::command::CommandOptionType;
use serenity::model::application::interaction::application_command::{
    ApplicationCommandInteraction, CommandDataOptionValue,
};
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

pub const TOP_COMMENTS_COMMAND: &str = "get-top-ten-comments";
pub const COMMENT_COMMAND: &str = "get-comment";

const EPHEMERAL_OPTION: &str = "isephemeral";
const LINK_OPTION: &str = "link";

const FEED_FAILURE: &str = "Sorry, I couldn't reach the comments backend. Try again in a bit.";

pub fn register(commands: &mut CreateApplicationCommands) -> &mut CreateApplicationCommands {
    commands
        .create_application_command(|c| {
            c.name(TOP_COMMENTS_COMMAND)
                .description("Show the server's top ten comments");
            ephemeral_option(c)
        })
        .create_application_command(|c| {
            c.name(COMMENT_COMMAND)
                .description("Show a nominated comment and its votes")
                .create_option(|o| {
                    o.name(LINK_OPTION)
                        .description("Link to the message")
                        .kind(CommandOptionType::String)
                        .required(true)
                });
            ephemeral_option(c)
        })
}

fn ephemeral_option(command: &mut CreateApplicationCommand) -> &mut CreateApplicationCommand {
    command.create_option(|o| {
        o.name(EPHEMERAL_OPTION)
            .description("Keep this post hidden?")
            .kind(CommandOptionType::Boolean)
            .required(false)
    })
}

fn option<'a>(
    command: &'a ApplicationCommandInteraction,
    name: &str,
) -> Option<&'a CommandDataOptionValue> {
    command
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.resolved.as_ref())
}

/// Hidden unless the requester explicitly asked otherwise.
fn visibility_of(value: Option<&CommandDataOptionValue>) -> Visibility {
    match value {
        Some(CommandDataOptionValue::Boolean(ephemeral)) => Visibility::from_ephemeral(*ephemeral),
        _ => Visibility::Ephemeral,
    }
}

async fn defer(
    ctx: &Context,
    command: &ApplicationCommandInteraction,
    visibility: Visibility,
) -> Result<()> {
    command
        .create_interaction_response(&ctx.http, |r| {
            r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
                .interaction_response_data(|d| d.ephemeral(visibility.is_ephemeral()))
        })
        .await?;
    Ok(())
}

/// Tells the requester the backend is down and fails the whole command.
async fn feed_failure<O: Outlet, T>(outlet: &O, why: feed::Error) -> Result<T> {
    error!("nomination feed unavailable: {why}");
    outlet.acknowledge(FEED_FAILURE).await?;
    Err(Error::FeedUnavailable(why))
}

impl Handler {
    pub(super) async fn handle_command(
        &self,
        ctx: &Context,
        command: &ApplicationCommandInteraction,
    ) -> Result<()> {
        let visibility = visibility_of(option(command, EPHEMERAL_OPTION));
        debug!(
            "{} used {} ({:?})",
            command.user.name, command.data.name, visibility
        );
        defer(ctx, command, visibility).await?;

        let reply = Reply::new(ctx, command);
        match command.data.name.as_str() {
            TOP_COMMENTS_COMMAND => self.top_comments(ctx, &reply, visibility).await,
            COMMENT_COMMAND => {
                let link = match option(command, LINK_OPTION) {
                    Some(CommandDataOptionValue::String(link)) => link.as_str(),
                    _ => return reply.acknowledge("Please give me a message link.").await,
                };
                self.comment(ctx, &reply, visibility, link).await
            }
            _ => reply.acknowledge("Unrecognized command").await,
        }
    }
}
