use phf::phf_set;

static IMAGE_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "jpg", "jpeg", "png", "gif", "bmp",
};

static AUDIO_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "mp3", "wav", "ogg", "flac", "m4a", "aac",
};

static VIDEO_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm",
};

#[derive(Hash, Eq, PartialEq, Debug, Copy, Clone)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    Unknown,
}

impl MediaKind {
    /// Classifies a filename or url by its extension. Case-insensitive, any
    /// `?query` suffix is ignored. Never fails, unknown extensions are `Unknown`.
    pub fn classify(name: &str) -> MediaKind {
        let ext = match extension(name) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return MediaKind::Unknown,
        };

        if IMAGE_EXTENSIONS.contains(ext.as_str()) {
            MediaKind::Image
        } else if AUDIO_EXTENSIONS.contains(ext.as_str()) {
            MediaKind::Audio
        } else if VIDEO_EXTENSIONS.contains(ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Unknown
        }
    }

    /// Audio and video can't be shown inline as an embed image.
    #[inline]
    pub const fn is_playable(&self) -> bool {
        matches!(self, MediaKind::Audio | MediaKind::Video)
    }
}

fn extension(name: &str) -> Option<&str> {
    let path = name.split('?').next().unwrap_or(name);
    let file = path.rsplit('/').next().unwrap_or(path);
    file.rsplit_once('.').map(|(_, ext)| ext)
}
