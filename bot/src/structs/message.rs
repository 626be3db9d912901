use super::media::MediaKind;

use chrono::{DateTime, Utc};
use serenity::model::channel::{Attachment, Embed, EmbedField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Guild nickname when one is set, otherwise the account name.
    pub display_name: String,
    pub username: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttachment {
    pub url: String,
    pub filename: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
}

impl ResolvedAttachment {
    #[inline]
    pub const fn has_dimensions(&self) -> bool {
        matches!((self.width, self.height), (Some(w), Some(h)) if w > 0 && h > 0)
    }

    pub fn media_kind(&self) -> MediaKind {
        match MediaKind::classify(&self.filename) {
            MediaKind::Unknown => MediaKind::classify(&self.url),
            kind => kind,
        }
    }

    /// True for anything the platform will render as an image. Dimensions win,
    /// the extension is only consulted when they are missing or zero.
    pub fn is_display_media(&self) -> bool {
        self.has_dimensions() || self.media_kind() == MediaKind::Image
    }
}

impl From<&Attachment> for ResolvedAttachment {
    fn from(attachment: &Attachment) -> Self {
        ResolvedAttachment {
            url: attachment.url.clone(),
            filename: attachment.filename.clone(),
            width: attachment.width,
            height: attachment.height,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEmbed {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub author_name: Option<String>,
    pub footer_text: Option<String>,
    pub fields: Vec<ResolvedField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl From<&EmbedField> for ResolvedField {
    fn from(field: &EmbedField) -> Self {
        ResolvedField {
            name: field.name.clone(),
            value: field.value.clone(),
            inline: field.inline,
        }
    }
}

impl ResolvedEmbed {
    /// The url of the picture this embed shows, if it shows one. Image-type
    /// embeds (a bare link to a picture) carry it in `url`.
    pub fn image_source(&self) -> Option<&str> {
        if let Some(image) = self.image_url.as_deref() {
            return Some(image);
        }
        if self.kind.as_deref() == Some("image") {
            return self.url.as_deref().or(self.thumbnail_url.as_deref());
        }
        None
    }

    pub fn media_kind(&self) -> MediaKind {
        if self.image_source().is_some() {
            MediaKind::Image
        } else {
            self.url.as_deref().map_or(MediaKind::Unknown, MediaKind::classify)
        }
    }

    /// What to show as the picture for this embed: its image source, or the link
    /// itself when that points straight at an image file.
    pub fn picture_url(&self) -> Option<&str> {
        match self.media_kind() {
            MediaKind::Image => self.image_source().or(self.url.as_deref()),
            _ => None,
        }
    }
}

impl From<&Embed> for ResolvedEmbed {
    fn from(embed: &Embed) -> Self {
        ResolvedEmbed {
            kind: embed.kind.clone(),
            title: embed.title.clone(),
            description: embed.description.clone(),
            url: embed.url.clone(),
            image_url: embed.image.as_ref().map(|image| image.url.clone()),
            thumbnail_url: embed.thumbnail.as_ref().map(|thumb| thumb.url.clone()),
            author_name: embed.author.as_ref().map(|author| author.name.clone()),
            footer_text: embed.footer.as_ref().map(|footer| footer.text.clone()),
            fields: embed.fields.iter().map(ResolvedField::from).collect(),
        }
    }
}

/// A platform message reduced to what rendering needs. Built once per lookup and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    pub author: Author,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub jump_url: String,
    pub attachments: Vec<ResolvedAttachment>,
    pub embeds: Vec<ResolvedEmbed>,
    /// The message this one replied to. Only one level is resolved: a referenced
    /// message never carries a reference of its own, deeper chains are cut here.
    pub referenced: Option<Box<ResolvedMessage>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(filename: &str, width: Option<u64>, height: Option<u64>) -> ResolvedAttachment {
        ResolvedAttachment {
            url: format!("https://cdn.discordapp.com/attachments/1/2/{filename}?ex=1"),
            filename: filename.to_string(),
            width,
            height,
        }
    }

    #[test]
    fn test_dimensions_make_display_media() {
        // extension says nothing useful, dimensions decide
        assert!(attachment("blob", Some(100), Some(100)).is_display_media());
        assert!(attachment("sticker.webp", Some(64), Some(64)).is_display_media());
    }

    #[test]
    fn test_zero_dimensions_fall_back_to_extension() {
        assert!(attachment("cat.png", Some(0), Some(0)).is_display_media());
        assert!(attachment("cat.png", None, None).is_display_media());
        assert!(!attachment("song.mp3", Some(0), Some(10)).is_display_media());
        assert!(!attachment("notes.txt", None, None).is_display_media());
    }

    #[test]
    fn test_media_kind_unaffected_by_dimensions() {
        assert_eq!(attachment("clip.mp4", Some(1920), Some(1080)).media_kind(), MediaKind::Video);
        assert_eq!(attachment("clip.mp4", None, None).media_kind(), MediaKind::Video);
    }

    #[test]
    fn test_embed_image_source() {
        let rich = ResolvedEmbed {
            kind: Some("rich".to_string()),
            url: Some("https://example.org/article".to_string()),
            image_url: Some("https://example.org/header.png".to_string()),
            ..Default::default()
        };
        assert_eq!(rich.image_source(), Some("https://example.org/header.png"));
        assert_eq!(rich.media_kind(), MediaKind::Image);

        let bare = ResolvedEmbed {
            kind: Some("image".to_string()),
            url: Some("https://i.imgur.com/abc".to_string()),
            thumbnail_url: Some("https://images-ext.discordapp.net/abc".to_string()),
            ..Default::default()
        };
        assert_eq!(bare.image_source(), Some("https://i.imgur.com/abc"));

        let link = ResolvedEmbed {
            kind: Some("link".to_string()),
            url: Some("https://example.org/podcast.mp3".to_string()),
            thumbnail_url: Some("https://example.org/cover.png".to_string()),
            ..Default::default()
        };
        assert_eq!(link.image_source(), None);
        assert_eq!(link.media_kind(), MediaKind::Audio);
    }

    #[test]
    fn test_embed_picture_url() {
        let direct = ResolvedEmbed {
            kind: Some("link".to_string()),
            url: Some("https://example.org/Meme.PNG?width=400".to_string()),
            ..Default::default()
        };
        assert_eq!(direct.media_kind(), MediaKind::Image);
        assert_eq!(direct.picture_url(), Some("https://example.org/Meme.PNG?width=400"));

        let rich = ResolvedEmbed {
            url: Some("https://example.org/article".to_string()),
            image_url: Some("https://example.org/header.png".to_string()),
            ..Default::default()
        };
        assert_eq!(rich.picture_url(), Some("https://example.org/header.png"));

        let clip = ResolvedEmbed {
            kind: Some("video".to_string()),
            url: Some("https://example.org/clip.mp4".to_string()),
            thumbnail_url: Some("https://example.org/clip.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(clip.picture_url(), None);
    }
}
