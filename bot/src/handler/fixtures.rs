//! In-memory stand-ins for Discord, shared by the handler tests.

use super::lookup::MessageLookup;
use crate::errors::{Error, Result};
use crate::structs::{
    Author, Outlet, ParsedLink, RenderedComment, ResolvedAttachment, ResolvedMessage,
};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use feed::{Lookup, NominationRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const GUILD: u64 = 111;
pub const CHANNEL: u64 = 222;

pub fn author(username: &str) -> Author {
    Author {
        display_name: format!("{username} nick"),
        username: username.to_string(),
        avatar_url: format!("https://cdn.discordapp.com/avatars/{username}.png"),
    }
}

pub fn message(id: u64, author: Author, content: &str) -> ResolvedMessage {
    ResolvedMessage {
        author,
        content: content.to_string(),
        timestamp: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).single(),
        jump_url: ParsedLink::new(GUILD, CHANNEL, id).uri(),
        attachments: Vec::new(),
        embeds: Vec::new(),
        referenced: None,
    }
}

pub fn attachment(filename: &str, width: Option<u64>, height: Option<u64>) -> ResolvedAttachment {
    ResolvedAttachment {
        url: format!("https://cdn.discordapp.com/attachments/{CHANNEL}/9/{filename}?ex=65"),
        filename: filename.to_string(),
        width,
        height,
    }
}

pub fn nomination(message_id: u64, votes: u64) -> NominationRecord {
    NominationRecord::new(&ParsedLink::new(GUILD, CHANNEL, message_id).uri(), votes)
}

#[derive(Default)]
pub struct FakeLookup {
    messages: HashMap<u64, ResolvedMessage>,
    broken: HashSet<u64>,
}

impl FakeLookup {
    pub fn new() -> FakeLookup {
        FakeLookup::default()
    }

    pub fn with(mut self, id: u64, message: ResolvedMessage) -> FakeLookup {
        self.messages.insert(id, message);
        self
    }

    /// Lookups for this id fail as if the connection dropped.
    pub fn broken(mut self, id: u64) -> FakeLookup {
        self.broken.insert(id);
        self
    }
}

#[async_trait]
impl MessageLookup for FakeLookup {
    async fn fetch_message(&self, link: &ParsedLink) -> Result<Lookup<ResolvedMessage>> {
        if self.broken.contains(&link.message) {
            return Err(Error::ConstStr("connection reset"));
        }
        Ok(self.messages.get(&link.message).cloned().into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Posted {
    Public(RenderedComment),
    Private(RenderedComment),
    Acknowledged(String),
}

#[derive(Default)]
pub struct RecordingOutlet {
    events: Mutex<Vec<Posted>>,
    /// Posting a comment linking to one of these fails.
    refuse: HashSet<String>,
}

impl RecordingOutlet {
    pub fn new() -> RecordingOutlet {
        RecordingOutlet::default()
    }

    pub fn refusing(mut self, link: &str) -> RecordingOutlet {
        self.refuse.insert(link.to_string());
        self
    }

    pub fn events(&self) -> Vec<Posted> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, comment: &RenderedComment, event: Posted) -> Result<()> {
        if self.refuse.contains(&comment.button.url) {
            return Err(Error::ConstStr("Missing Permissions"));
        }
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

#[async_trait]
impl Outlet for RecordingOutlet {
    async fn post_public(&self, comment: &RenderedComment) -> Result<()> {
        self.record(comment, Posted::Public(comment.clone()))
    }

    async fn post_private(&self, comment: &RenderedComment) -> Result<()> {
        self.record(comment, Posted::Private(comment.clone()))
    }

    async fn acknowledge(&self, text: &str) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(Posted::Acknowledged(text.to_string()));
        Ok(())
    }
}
