use super::reference::non_empty;
use crate::structs::{DisplayUnit, ResolvedAttachment, ResolvedEmbed, ResolvedMessage};

use log::debug;

/// Supplementary units for a nominated message's own media: every embed, then
/// every attachment, in platform order. Nothing is filtered out here.
pub fn compose_media(message: &ResolvedMessage) -> Vec<DisplayUnit> {
    let jump_url = message.jump_url.as_str();
    message
        .embeds
        .iter()
        .map(|embed| embed_unit(embed, jump_url))
        .chain(
            message
                .attachments
                .iter()
                .map(|attachment| attachment_unit(attachment, jump_url)),
        )
        .collect()
}

fn embed_unit(embed: &ResolvedEmbed, jump_url: &str) -> DisplayUnit {
    let image_url = embed
        .picture_url()
        .or(embed.thumbnail_url.as_deref())
        .map(str::to_string);
    let title = embed.title.clone();
    let mut description = embed.description.as_deref().and_then(non_empty);

    // video and plain link embeds may carry nothing we can show, keep the link
    if title.is_none() && description.is_none() && image_url.is_none() && embed.fields.is_empty() {
        debug!("embed {:?} has nothing to show, keeping its link", embed.url);
        description = embed.url.clone();
    }

    DisplayUnit {
        author_label: embed.author_name.as_deref().and_then(non_empty),
        title,
        description,
        image_url,
        url: Some(jump_url.to_string()),
        footer_text: embed.footer_text.as_deref().and_then(non_empty),
        fields: embed.fields.clone(),
        ..Default::default()
    }
}

fn attachment_unit(attachment: &ResolvedAttachment, jump_url: &str) -> DisplayUnit {
    // audio and video won't render as an image, show a link to play them
    let description = if attachment.media_kind().is_playable() {
        Some(attachment.url.clone())
    } else {
        None
    };

    DisplayUnit {
        description,
        image_url: Some(attachment.url.clone()),
        url: Some(jump_url.to_string()),
        ..Default::default()
    }
}
