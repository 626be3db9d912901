#![warn(
    clippy::cognitive_complexity,
    clippy::missing_const_for_fn,
    clippy::option_if_let_else
)]

mod config;
mod errors;
mod handler;
mod structs;
mod utils;

use log::LevelFilter;
use log::{error, info};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use simple_logger::SimpleLogger;
use time::UtcOffset;

use std::process;

use config::Config;
use handler::Handler;

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => {
            info!(
                "loaded config, feed at {}, {} palette colours",
                config.feed_base_url,
                config.palette.len()
            );
            config
        }
        Err(why) => {
            error!("Failed to load config, exiting {why}");
            process::exit(-1);
        }
    }
}

#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("bestof", LevelFilter::Debug)
        .with_module_level("feed", LevelFilter::Debug)
        .with_utc_offset(UtcOffset::UTC)
        .init()
        .unwrap();

    let config = load_config();

    // init for tokio metrics
    console_subscriber::init();

    // reading past messages needs their content
    let intents = GatewayIntents::GUILDS
        .union(GatewayIntents::GUILD_MEMBERS)
        .union(GatewayIntents::GUILD_MESSAGES)
        .union(GatewayIntents::MESSAGE_CONTENT);

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler::new(&config))
        .await
        .expect("Err creating client");

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }
}
