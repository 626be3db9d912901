use super::message::ResolvedField;
use crate::utils::to_serenity_timestamp;

use chrono::{DateTime, Utc};
use log::warn;
use serenity::builder::CreateEmbed;
use serenity::utils::Colour;

pub const LINK_BUTTON_LABEL: &str = "Take me to the post 📫";

/// Discord refuses messages with more embeds than this.
pub const MAX_EMBEDS_PER_MESSAGE: usize = 10;

/// Discord's limit on the combined text of every embed in one message.
pub const MAX_EMBED_TEXT: usize = 6000;

const ELLIPSIS: char = '…';

/// One boxed block of a rendered post. Kept free of serenity builders so the
/// composition can be compared in tests; `to_embed` does the conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayUnit {
    pub author_label: Option<String>,
    pub author_icon_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub colour: Option<Colour>,
    pub timestamp: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub footer_text: Option<String>,
    pub fields: Vec<ResolvedField>,
}

impl DisplayUnit {
    /// Characters that count towards `MAX_EMBED_TEXT`.
    pub fn text_len(&self) -> usize {
        let counted = |text: &Option<String>| text.as_deref().map_or(0, |t| t.chars().count());
        counted(&self.author_label)
            + counted(&self.title)
            + counted(&self.description)
            + counted(&self.footer_text)
            + self
                .fields
                .iter()
                .map(|f| f.name.chars().count() + f.value.chars().count())
                .sum::<usize>()
    }

    pub fn to_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::default();
        if let Some(name) = &self.author_label {
            embed.author(|a| {
                a.name(name);
                if let Some(icon) = &self.author_icon_url {
                    a.icon_url(icon);
                }
                a
            });
        }
        if let Some(title) = &self.title {
            embed.title(title);
        }
        if let Some(description) = &self.description {
            embed.description(description);
        }
        if let Some(image) = &self.image_url {
            embed.image(image);
        }
        if let Some(colour) = self.colour {
            embed.colour(colour);
        }
        if let Some(timestamp) = self.timestamp.as_ref().and_then(to_serenity_timestamp) {
            embed.timestamp(timestamp);
        }
        if let Some(url) = &self.url {
            embed.url(url);
        }
        if let Some(footer) = &self.footer_text {
            embed.footer(|f| f.text(footer));
        }
        for field in &self.fields {
            embed.field(&field.name, &field.value, field.inline);
        }
        embed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: &'static str,
    pub url: String,
}

impl LinkButton {
    pub fn new(url: &str) -> LinkButton {
        LinkButton {
            label: LINK_BUTTON_LABEL,
            url: url.to_string(),
        }
    }
}

/// Everything posted for one nomination: quoted context, the nominated message,
/// its media, and the button back to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComment {
    pub units: Vec<DisplayUnit>,
    pub button: LinkButton,
}

impl RenderedComment {
    /// The units that fit in one message: at most `MAX_EMBEDS_PER_MESSAGE` of
    /// them, with descriptions cut short front to back until the combined text
    /// fits `MAX_EMBED_TEXT`. A quoted unit comes first, so it gives way before
    /// the nominated message does.
    pub fn fitted_units(&self) -> Vec<DisplayUnit> {
        if self.units.len() > MAX_EMBEDS_PER_MESSAGE {
            warn!(
                "{} has {} display units, only the first {MAX_EMBEDS_PER_MESSAGE} are posted",
                self.button.url,
                self.units.len()
            );
        }
        let mut units: Vec<DisplayUnit> = self
            .units
            .iter()
            .take(MAX_EMBEDS_PER_MESSAGE)
            .cloned()
            .collect();

        let total: usize = units.iter().map(DisplayUnit::text_len).sum();
        let mut excess = total.saturating_sub(MAX_EMBED_TEXT);
        for unit in units.iter_mut() {
            if excess == 0 {
                break;
            }
            excess = shorten_description(unit, excess);
        }
        if excess > 0 {
            warn!(
                "{} is still {excess} characters over the embed text limit",
                self.button.url
            );
        }
        units
    }

    pub fn embeds(&self) -> Vec<CreateEmbed> {
        self.fitted_units()
            .iter()
            .map(DisplayUnit::to_embed)
            .collect()
    }
}

// Drops up to `excess` characters from the description, returns what is left over.
fn shorten_description(unit: &mut DisplayUnit, excess: usize) -> usize {
    let description = match unit.description.take() {
        Some(description) => description,
        None => return excess,
    };
    let len = description.chars().count();
    if len <= excess + 1 {
        return excess.saturating_sub(len);
    }

    let mut shortened: String = description.chars().take(len - excess - 1).collect();
    shortened.push(ELLIPSIS);
    unit.description = Some(shortened);
    0
}
