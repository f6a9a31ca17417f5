use serde::Deserialize;
use thiserror::Error;

const MANIFEST: &str = include_str!("../../gallery.json");

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid gallery manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("lightbox element #{0} not found")]
    MissingElement(&'static str),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Reads the `data-type` attribute. Anything that isn't `video` shows as an image.
    pub fn from_data_type(value: &str) -> Self {
        if value.eq_ignore_ascii_case("video") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_data_type(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaItem {
    kind: MediaKind,
    source_url: String,
}

impl MediaItem {
    pub fn new(kind: MediaKind, source_url: impl Into<String>) -> Self {
        Self {
            kind,
            source_url: source_url.into(),
        }
    }

    pub fn image(source_url: impl Into<String>) -> Self {
        Self::new(MediaKind::Image, source_url)
    }

    pub fn video(source_url: impl Into<String>) -> Self {
        Self::new(MediaKind::Video, source_url)
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

/// One thumbnail on the page, as listed in `gallery.json`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GalleryEntry {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl GalleryEntry {
    /// Image shown in the grid. Videos without a poster fall back to their source.
    pub fn thumbnail(&self) -> &str {
        self.thumb.as_deref().unwrap_or(&self.src)
    }

    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or("Gallery Image")
    }
}

pub fn parse_manifest(json: &str) -> Result<Vec<GalleryEntry>, GalleryError> {
    Ok(serde_json::from_str(json)?)
}

/// Entries compiled into the binary. A broken manifest leaves the gallery empty.
pub fn gallery_entries() -> Vec<GalleryEntry> {
    match parse_manifest(MANIFEST) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("{}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_image_and_video_entries() {
        let json = r#"[
            {"type": "image", "src": "/assets/gallery/a.jpg"},
            {"type": "video", "src": "/assets/gallery/b.mp4", "thumb": "/assets/gallery/b.jpg", "alt": "Smoker"}
        ]"#;

        let entries = parse_manifest(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, MediaKind::Image);
        assert_eq!(entries[0].thumbnail(), "/assets/gallery/a.jpg");
        assert_eq!(entries[0].alt_text(), "Gallery Image");
        assert_eq!(entries[1].kind, MediaKind::Video);
        assert_eq!(entries[1].thumbnail(), "/assets/gallery/b.jpg");
        assert_eq!(entries[1].alt_text(), "Smoker");
    }

    #[test]
    fn rejects_unknown_kind_and_bad_json() {
        assert!(matches!(
            parse_manifest(r#"[{"type": "gif", "src": "x"}]"#),
            Err(GalleryError::Manifest(_))
        ));
        assert!(parse_manifest("not json").is_err());
    }

    #[test]
    fn bundled_manifest_is_valid() {
        assert!(!parse_manifest(MANIFEST).unwrap().is_empty());
    }

    #[test]
    fn data_type_falls_back_to_image() {
        assert_eq!(MediaKind::from_data_type("video"), MediaKind::Video);
        assert_eq!(MediaKind::from_data_type("VIDEO"), MediaKind::Video);
        assert_eq!(MediaKind::from_data_type("image"), MediaKind::Image);
        assert_eq!(MediaKind::from_data_type(""), MediaKind::Image);
    }
}
