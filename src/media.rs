//! Grouped-media resolution for album sends and media edits.
//!
//! `sendMediaGroup` transmits several media items in one message. Each item
//! carries its own [`FileRef`]: remote references appear in the JSON payload
//! as literal strings, while uploads are pulled out into multipart file
//! parts and cross-referenced from the JSON with `attach://<part-name>`
//! tokens. Part names are derived from the item's position (`file0`,
//! `file1`, ...) so several uploads in one request can never collide.

use crate::error::{BotError, Result};
use crate::file::FileRef;
use crate::multipart::Part;
use crate::types::{MessageEntity, ParseMode};
use serde::Serialize;
use serde_json::Value;

/// A photo item of a media group.
#[derive(Debug, Clone, Serialize)]
pub struct InputMediaPhoto {
    #[serde(skip_serializing)]
    pub media: FileRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

/// A video item of a media group.
#[derive(Debug, Clone, Serialize)]
pub struct InputMediaVideo {
    #[serde(skip_serializing)]
    pub media: FileRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

/// An audio item of a media group.
#[derive(Debug, Clone, Serialize)]
pub struct InputMediaAudio {
    #[serde(skip_serializing)]
    pub media: FileRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A document item of a media group.
#[derive(Debug, Clone, Serialize)]
pub struct InputMediaDocument {
    #[serde(skip_serializing)]
    pub media: FileRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

/// An animation, accepted by `editMessageMedia` but not groupable.
#[derive(Debug, Clone, Serialize)]
pub struct InputMediaAnimation {
    #[serde(skip_serializing)]
    pub media: FileRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

impl InputMediaPhoto {
    pub fn new(media: FileRef) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: None,
        }
    }

    /// Sets the item's caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the caption parse mode.
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

impl InputMediaVideo {
    pub fn new(media: FileRef) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    /// Sets the video dimensions and duration in one go.
    pub fn with_dimensions(mut self, width: i64, height: i64, duration: i64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self.duration = Some(duration);
        self
    }
}

impl InputMediaAudio {
    pub fn new(media: FileRef) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            performer: None,
            title: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    /// Sets the track metadata shown in the music player.
    pub fn with_track_info(mut self, performer: impl Into<String>, title: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self.title = Some(title.into());
        self
    }
}

impl InputMediaDocument {
    pub fn new(media: FileRef) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

impl InputMediaAnimation {
    pub fn new(media: FileRef) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }
}

/// One media item of a group send or a media edit.
#[derive(Debug, Clone)]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
    Animation(InputMediaAnimation),
}

impl InputMedia {
    /// The platform's type discriminant for the JSON payload.
    pub fn kind(&self) -> &'static str {
        match self {
            InputMedia::Photo(_) => "photo",
            InputMedia::Video(_) => "video",
            InputMedia::Audio(_) => "audio",
            InputMedia::Document(_) => "document",
            InputMedia::Animation(_) => "animation",
        }
    }

    /// The item's file reference.
    pub fn media(&self) -> &FileRef {
        match self {
            InputMedia::Photo(item) => &item.media,
            InputMedia::Video(item) => &item.media,
            InputMedia::Audio(item) => &item.media,
            InputMedia::Document(item) => &item.media,
            InputMedia::Animation(item) => &item.media,
        }
    }

    /// Albums accept photos, videos, audio files and documents; animations
    /// can only be sent on their own.
    pub fn is_groupable(&self) -> bool {
        !matches!(self, InputMedia::Animation(_))
    }

    /// Serializes the item's metadata (everything except the media field)
    /// to a JSON object.
    fn metadata_value(&self) -> Result<Value> {
        let value = match self {
            InputMedia::Photo(item) => serde_json::to_value(item)?,
            InputMedia::Video(item) => serde_json::to_value(item)?,
            InputMedia::Audio(item) => serde_json::to_value(item)?,
            InputMedia::Document(item) => serde_json::to_value(item)?,
            InputMedia::Animation(item) => serde_json::to_value(item)?,
        };
        Ok(value)
    }

    /// Builds the wire JSON object for this item at the given position.
    /// Uploads are replaced by an `attach://` token and their bytes pushed
    /// onto `parts`; remote references stay literal.
    fn resolve(&self, index: usize, parts: &mut Vec<Part>) -> Result<Value> {
        let mut entry = self.metadata_value()?;
        let media_field = match self.media() {
            FileRef::Upload { file_name, data } => {
                let part_name = format!("file{index}");
                parts.push(Part::file(part_name.clone(), file_name.clone(), data.clone()));
                format!("attach://{part_name}")
            }
            FileRef::Remote(value) => value.clone(),
        };

        let object = entry
            .as_object_mut()
            .ok_or_else(|| BotError::invalid_argument("media item did not serialize to an object"))?;
        object.insert("type".to_string(), Value::String(self.kind().to_string()));
        object.insert("media".to_string(), Value::String(media_field));
        Ok(entry)
    }
}

/// Resolves an ordered media list into its JSON array and the multipart file
/// parts it references.
///
/// The JSON array preserves input order exactly — display order depends on
/// it — and `parts` holds one entry per upload item, in the same order. The
/// caller attaches the JSON as a text part named `"media"` alongside the
/// returned file parts. Group size bounds are the caller's responsibility;
/// only an empty list is rejected here.
pub fn resolve_group(items: &[InputMedia]) -> Result<(String, Vec<Part>)> {
    if items.is_empty() {
        return Err(BotError::invalid_argument("media group is empty"));
    }

    let mut parts = Vec::new();
    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        entries.push(item.resolve(index, &mut parts)?);
    }

    Ok((serde_json::to_string(&entries)?, parts))
}

/// Resolves a single media item (the `editMessageMedia` shape): one JSON
/// object instead of an array, with an upload referenced as
/// `attach://file0`.
pub fn resolve_single(item: &InputMedia) -> Result<(String, Vec<Part>)> {
    if item.media().is_empty() {
        return Err(BotError::invalid_argument("missing media attachment"));
    }

    let mut parts = Vec::new();
    let entry = item.resolve(0, &mut parts)?;
    Ok((serde_json::to_string(&entry)?, parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_photo(name: &str) -> InputMedia {
        InputMedia::Photo(InputMediaPhoto::new(FileRef::bytes(name, vec![0xFF, 0xD8])))
    }

    #[test]
    fn test_resolve_group_interleaved_local_remote() {
        let items = vec![
            local_photo("a.jpg"),
            InputMedia::Photo(InputMediaPhoto::new(FileRef::url(
                "https://example.com/b.jpg",
            ))),
            local_photo("c.jpg"),
        ];

        let (json, parts) = resolve_group(&items).unwrap();
        let array: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["media"], "attach://file0");
        assert_eq!(array[1]["media"], "https://example.com/b.jpg");
        assert_eq!(array[2]["media"], "attach://file2");

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "file0");
        assert_eq!(parts[1].name, "file2");
    }

    #[test]
    fn test_remote_items_produce_no_parts() {
        let items = vec![
            InputMedia::Photo(InputMediaPhoto::new(FileRef::id("AgACAgIAAxk"))),
            InputMedia::Video(InputMediaVideo::new(FileRef::url(
                "https://example.com/v.mp4",
            ))),
        ];

        let (json, parts) = resolve_group(&items).unwrap();
        let array: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert!(parts.is_empty());
        assert_eq!(array[0]["media"], "AgACAgIAAxk");
        assert_eq!(array[1]["media"], "https://example.com/v.mp4");
    }

    #[test]
    fn test_resolve_group_preserves_order_and_kinds() {
        let items = vec![
            InputMedia::Photo(InputMediaPhoto::new(FileRef::id("p"))),
            InputMedia::Video(InputMediaVideo::new(FileRef::id("v"))),
            InputMedia::Document(InputMediaDocument::new(FileRef::id("d"))),
        ];

        let (json, _) = resolve_group(&items).unwrap();
        let array: Vec<Value> = serde_json::from_str(&json).unwrap();

        let kinds: Vec<_> = array.iter().map(|e| e["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, vec!["photo", "video", "document"]);
    }

    #[test]
    fn test_unset_metadata_is_omitted() {
        let items = vec![local_photo("a.jpg")];
        let (json, _) = resolve_group(&items).unwrap();
        let array: Vec<Value> = serde_json::from_str(&json).unwrap();

        let object = array[0].as_object().unwrap();
        assert!(!object.contains_key("caption"));
        assert!(!object.contains_key("parse_mode"));
    }

    #[test]
    fn test_caption_is_carried_through() {
        let item = InputMediaPhoto::new(FileRef::id("p")).with_caption("first slide");
        let (json, _) = resolve_group(&[InputMedia::Photo(item)]).unwrap();
        let array: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(array[0]["caption"], "first slide");
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let err = resolve_group(&[]).unwrap_err();
        assert!(matches!(err, BotError::InvalidArgument { .. }));
    }

    #[test]
    fn test_resolve_single_upload() {
        let item = InputMedia::Animation(InputMediaAnimation::new(FileRef::bytes(
            "loop.gif",
            vec![b'G', b'I', b'F'],
        )));

        let (json, parts) = resolve_single(&item).unwrap();
        let entry: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(entry["type"], "animation");
        assert_eq!(entry["media"], "attach://file0");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "file0");
    }

    #[test]
    fn test_groupable_kinds() {
        assert!(local_photo("a.jpg").is_groupable());
        let animation =
            InputMedia::Animation(InputMediaAnimation::new(FileRef::id("anim")));
        assert!(!animation.is_groupable());
    }
}
