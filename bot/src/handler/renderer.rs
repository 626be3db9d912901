use super::attachments::compose_media;
use super::lookup::MessageLookup;
use super::reference::{non_empty, resolve_reference};
use crate::errors::{Error, Result};
use crate::structs::{ColourCycler, DisplayUnit, LinkButton, ParsedLink, RenderedComment, ResolvedMessage};

use feed::{Lookup, NominationRecord};
use log::debug;
use serenity::utils::Colour;

/// Turns nominations into posts. One renderer is one batch: it owns the colour
/// cycle, so every invocation builds its own.
pub struct CommentRenderer<'a, L: MessageLookup> {
    lookup: &'a L,
    colours: ColourCycler,
}

impl<'a, L: MessageLookup> CommentRenderer<'a, L> {
    pub fn new(lookup: &'a L, colours: ColourCycler) -> CommentRenderer<'a, L> {
        CommentRenderer { lookup, colours }
    }

    /// Resolves and renders one nomination in the pending colour. The colour is
    /// only used up by `commit`, once the post actually went out, so skipped
    /// nominations don't shift later pairings.
    pub async fn render(&mut self, nomination: &NominationRecord) -> Result<RenderedComment> {
        let link = ParsedLink::parse(&nomination.message_link)?;
        let message = match self.lookup.fetch_message(&link).await? {
            Lookup::Found(message) => message,
            Lookup::NotFound => {
                return Err(Error::MessageResolution(nomination.message_link.clone()))
            }
        };

        let colour = self.colours.peek();
        debug!(
            "rendering {} ({} votes) in colour {:06X}",
            nomination.message_link,
            nomination.vote_count,
            colour.0
        );
        Ok(compose(nomination, &message, colour))
    }

    /// Marks the pending colour as taken.
    pub fn commit(&mut self) -> Colour {
        self.colours.next_colour()
    }
}

/// `[quoted?] + [primary] + [media...]`, plus the button back to the original.
pub fn compose(
    nomination: &NominationRecord,
    message: &ResolvedMessage,
    colour: Colour,
) -> RenderedComment {
    let quoted = resolve_reference(message, colour);
    let media = compose_media(message);

    let mut units = Vec::with_capacity(2 + media.len());
    units.extend(quoted.unit);
    units.push(primary_unit(nomination, message, colour, &quoted.reply_hint));
    units.extend(media);

    RenderedComment {
        units,
        button: LinkButton::new(&nomination.message_link),
    }
}

fn primary_unit(
    nomination: &NominationRecord,
    message: &ResolvedMessage,
    colour: Colour,
    reply_hint: &str,
) -> DisplayUnit {
    DisplayUnit {
        author_label: Some(author_label(&message.author.display_name, reply_hint)),
        author_icon_url: Some(message.author.avatar_url.clone()),
        description: non_empty(&message.content),
        colour: Some(colour),
        timestamp: message.timestamp,
        url: Some(message.jump_url.clone()),
        footer_text: Some(format!("Votes: {}", nomination.vote_count)),
        ..Default::default()
    }
}

fn author_label(display_name: &str, reply_hint: &str) -> String {
    if reply_hint.is_empty() {
        display_name.to_string()
    } else {
        format!("{display_name} {reply_hint}")
    }
}
