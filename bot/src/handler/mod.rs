mod attachments;
mod commands;
mod disseminator;
mod lookup;
mod reference;
mod renderer;

#[cfg(test)]
mod fixtures;

use crate::config::Config;

use feed::FeedClient;
use log::{error, info, warn};
use serenity::{
    async_trait,
    model::{
        application::{command::Command, interaction::Interaction},
        gateway::Ready,
        id::GuildId,
    },
    prelude::*,
    utils::Colour,
};

pub struct Handler {
    feed: FeedClient,
    palette: Vec<Colour>,
    /// Commands are registered on this guild only when set, globally otherwise.
    guild: Option<GuildId>,
}

impl Handler {
    pub fn new(config: &Config) -> Handler {
        Handler {
            feed: FeedClient::new(&config.feed_base_url),
            palette: config.palette.clone(),
            guild: config.guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        let registered = match self.guild {
            Some(guild) => {
                guild
                    .set_application_commands(&ctx.http, commands::register)
                    .await
            }
            None => Command::set_global_application_commands(&ctx.http, commands::register).await,
        };

        match registered {
            Ok(commands) => info!(
                "registered commands {:?}",
                commands.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
            ),
            Err(why) => error!("Failed to register commands: {why}"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::ApplicationCommand(command) = interaction {
            if let Err(why) = self.handle_command(&ctx, &command).await {
                warn!(
                    "Failed to process command {} for {} with err: {why}",
                    command.data.name, command.user.name
                );
            }
        }
    }
}
