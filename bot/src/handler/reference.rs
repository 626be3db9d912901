use crate::structs::{DisplayUnit, ResolvedEmbed, ResolvedMessage};

use serenity::utils::Colour;

/// What a nomination shows of the message it replied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotedContext {
    pub unit: Option<DisplayUnit>,
    /// `(replying to {username})`, or empty when the message isn't a reply.
    pub reply_hint: String,
}

/// Builds the quoted unit for a reply, coloured like the nomination so the two
/// read as a pair.
pub fn resolve_reference(message: &ResolvedMessage, colour: Colour) -> QuotedContext {
    let referenced = match message.referenced.as_deref() {
        Some(referenced) => referenced,
        None => return QuotedContext::default(),
    };

    let unit = DisplayUnit {
        author_label: Some(referenced.author.display_name.clone()),
        author_icon_url: Some(referenced.author.avatar_url.clone()),
        description: non_empty(&referenced.content),
        image_url: quoted_image(referenced).map(str::to_string),
        colour: Some(colour),
        timestamp: referenced.timestamp,
        url: Some(referenced.jump_url.clone()),
        ..Default::default()
    };

    QuotedContext {
        unit: Some(unit),
        reply_hint: format!("(replying to {})", referenced.author.username),
    }
}

// An attachment beats an embed when the quoted message has both.
fn quoted_image(message: &ResolvedMessage) -> Option<&str> {
    let attachment = message
        .attachments
        .iter()
        .find(|attachment| attachment.is_display_media())
        .map(|attachment| attachment.url.as_str());
    let embed = message.embeds.iter().find_map(ResolvedEmbed::picture_url);
    attachment.or(embed)
}

pub(super) fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::fixtures::{attachment, author, message};

    const RED: Colour = Colour(0xF44336);

    fn image_embed(url: &str) -> ResolvedEmbed {
        ResolvedEmbed {
            kind: Some("image".to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_not_a_reply() {
        let context = resolve_reference(&message(333, author("ada"), "hi"), RED);
        assert_eq!(context, QuotedContext::default());
        assert!(context.reply_hint.is_empty());
    }

    #[test]
    fn test_quoted_unit_fields() {
        let parent = message(334, author("grace"), "what do you think?");
        let mut reply = message(333, author("ada"), "brilliant");
        reply.referenced = Some(Box::new(parent.clone()));

        let context = resolve_reference(&reply, RED);
        let unit = context.unit.unwrap();
        assert_eq!(unit.author_label.as_deref(), Some("grace nick"));
        assert_eq!(unit.author_icon_url, Some(parent.author.avatar_url.clone()));
        assert_eq!(unit.description.as_deref(), Some("what do you think?"));
        assert_eq!(unit.timestamp, parent.timestamp);
        assert_eq!(unit.url, Some(parent.jump_url.clone()));
        assert_eq!(unit.colour, Some(RED));
        assert_eq!(unit.image_url, None);
        assert_eq!(unit.footer_text, None);
        assert_eq!(context.reply_hint, "(replying to grace)");
    }

    #[test]
    fn test_first_display_attachment_used() {
        let mut parent = message(334, author("grace"), "look");
        parent.attachments = vec![
            attachment("notes.txt", None, None),
            attachment("first.png", Some(100), Some(100)),
            attachment("second.png", Some(100), Some(100)),
        ];
        let mut reply = message(333, author("ada"), "nice");
        reply.referenced = Some(Box::new(parent.clone()));

        let unit = resolve_reference(&reply, RED).unit.unwrap();
        assert_eq!(unit.image_url, Some(parent.attachments[1].url.clone()));
    }

    #[test]
    fn test_embed_image_used() {
        let mut parent = message(334, author("grace"), "https://i.imgur.com/abc.png");
        parent.embeds = vec![image_embed("https://i.imgur.com/abc.png")];
        let mut reply = message(333, author("ada"), "nice");
        reply.referenced = Some(Box::new(parent));

        let unit = resolve_reference(&reply, RED).unit.unwrap();
        assert_eq!(unit.image_url.as_deref(), Some("https://i.imgur.com/abc.png"));
    }

    #[test]
    fn test_link_to_image_file_used() {
        let mut parent = message(334, author("grace"), "https://example.org/chart.jpeg");
        parent.embeds = vec![
            ResolvedEmbed {
                kind: Some("link".to_string()),
                url: Some("https://example.org/post".to_string()),
                ..Default::default()
            },
            ResolvedEmbed {
                kind: Some("link".to_string()),
                url: Some("https://example.org/chart.jpeg".to_string()),
                ..Default::default()
            },
        ];
        let mut reply = message(333, author("ada"), "nice");
        reply.referenced = Some(Box::new(parent));

        let unit = resolve_reference(&reply, RED).unit.unwrap();
        assert_eq!(unit.image_url.as_deref(), Some("https://example.org/chart.jpeg"));
    }

    #[test]
    fn test_attachment_beats_embed() {
        let mut parent = message(334, author("grace"), "both");
        parent.embeds = vec![image_embed("https://i.imgur.com/abc.png")];
        parent.attachments = vec![attachment("upload.jpg", Some(640), Some(480))];
        let mut reply = message(333, author("ada"), "nice");
        reply.referenced = Some(Box::new(parent.clone()));

        let unit = resolve_reference(&reply, RED).unit.unwrap();
        assert_eq!(unit.image_url, Some(parent.attachments[0].url.clone()));
    }

    #[test]
    fn test_non_visual_attachments_ignored() {
        let mut parent = message(334, author("grace"), "listen");
        parent.attachments = vec![attachment("song.mp3", None, None)];
        let mut reply = message(333, author("ada"), "banger");
        reply.referenced = Some(Box::new(parent));

        let unit = resolve_reference(&reply, RED).unit.unwrap();
        assert_eq!(unit.image_url, None);
    }

    #[test]
    fn test_empty_content_has_no_description() {
        let mut parent = message(334, author("grace"), "   ");
        parent.attachments = vec![attachment("cat.png", Some(10), Some(10))];
        let mut reply = message(333, author("ada"), "cute");
        reply.referenced = Some(Box::new(parent));

        let unit = resolve_reference(&reply, RED).unit.unwrap();
        assert_eq!(unit.description, None);
        assert!(unit.image_url.is_some());
    }
}
