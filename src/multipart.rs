//! Multipart body composition for file-carrying endpoints.
//!
//! The composer turns a primary [`FileRef`], any auxiliary references (a
//! thumbnail, for instance) and the call's option parameters into one
//! in-memory [`MultipartBody`]. Upload references become file parts named
//! after their logical slot; remote references become scalar text parts with
//! the same name; option parameters become scalar text parts under the same
//! omission rules as the query serializer.
//!
//! The body is an owned description, not a network object: the transport
//! converts it into a `reqwest::multipart::Form` per attempt, which keeps
//! retries possible.

use crate::error::{BotError, Result};
use crate::file::FileRef;
use crate::query::ParamList;

/// The content of one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File { file_name: String, data: Vec<u8> },
}

/// A named part of a multipart request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub body: PartBody,
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Part {
            name: name.into(),
            body: PartBody::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Part {
            name: name.into(),
            body: PartBody::File {
                file_name: file_name.into(),
                data,
            },
        }
    }

    /// True for parts carrying raw file content.
    pub fn is_file(&self) -> bool {
        matches!(self.body, PartBody::File { .. })
    }
}

/// An ordered multipart/form-data body.
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    parts: Vec<Part>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(Part::text(name, value));
    }

    pub fn push_file(
        &mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        data: Vec<u8>,
    ) {
        self.parts.push(Part::file(name, file_name, data));
    }

    pub fn push_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Total number of bytes carried by file parts, used to enforce the
    /// configured upload limit before any network attempt.
    pub fn upload_size(&self) -> u64 {
        self.parts
            .iter()
            .map(|part| match &part.body {
                PartBody::File { data, .. } => data.len() as u64,
                PartBody::Text(_) => 0,
            })
            .sum()
    }

    /// Builds a `reqwest` form from this body. File parts get their MIME
    /// type guessed from the file name, falling back to octet-stream.
    pub fn to_form(&self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for part in &self.parts {
            match &part.body {
                PartBody::Text(text) => {
                    form = form.text(part.name.clone(), text.clone());
                }
                PartBody::File { file_name, data } => {
                    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
                    let file_part = reqwest::multipart::Part::bytes(data.clone())
                        .file_name(file_name.clone());
                    let file_part = file_part.mime_str(mime.essence_str()).unwrap_or_else(|_| {
                        reqwest::multipart::Part::bytes(data.clone()).file_name(file_name.clone())
                    });
                    form = form.part(part.name.clone(), file_part);
                }
            }
        }
        form
    }
}

/// Composes a multipart body from a primary file reference, auxiliary
/// references, and the call's option parameters.
///
/// Slot names are fixed per call shape (`"photo"`, `"thumb"`, ...), so part
/// names cannot collide. An absent or empty primary reference is rejected
/// before anything is sent.
pub fn compose(
    slot: &'static str,
    primary: &FileRef,
    auxiliary: &[(&'static str, &FileRef)],
    fields: &ParamList,
) -> Result<MultipartBody> {
    if primary.is_empty() {
        return Err(BotError::invalid_argument(format!(
            "missing {slot} attachment"
        )));
    }

    let mut body = MultipartBody::new();
    append_ref(&mut body, slot, primary);

    for (name, file_ref) in auxiliary {
        if !file_ref.is_empty() {
            append_ref(&mut body, name, file_ref);
        }
    }

    for (name, value) in fields.iter() {
        body.push_text(name, value.render());
    }

    Ok(body)
}

fn append_ref(body: &mut MultipartBody, name: &str, file_ref: &FileRef) {
    match file_ref {
        FileRef::Upload { file_name, data } => {
            body.push_file(name, file_name.clone(), data.clone());
        }
        FileRef::Remote(value) => {
            body.push_text(name, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_upload_primary() {
        let photo = FileRef::bytes("photo.jpg", vec![0xFF, 0xD8]);
        let body = compose("photo", &photo, &[], &ParamList::new()).unwrap();

        assert_eq!(body.len(), 1);
        let part = &body.parts()[0];
        assert_eq!(part.name, "photo");
        assert!(part.is_file());
    }

    #[test]
    fn test_compose_remote_thumb_becomes_scalar() {
        let photo = FileRef::bytes("photo.jpg", vec![0xFF, 0xD8]);
        let thumb = FileRef::id("AgACAgIAAxk");
        let body = compose("photo", &photo, &[("thumb", &thumb)], &ParamList::new()).unwrap();

        assert_eq!(body.len(), 2);
        assert!(body.parts()[0].is_file());
        assert_eq!(
            body.parts()[1],
            Part::text("thumb", "AgACAgIAAxk"),
        );
    }

    #[test]
    fn test_compose_upload_thumb_is_file_part() {
        let video = FileRef::bytes("clip.mp4", vec![0, 0, 0, 0x18]);
        let thumb = FileRef::bytes("cover.jpg", vec![0xFF, 0xD8]);
        let body = compose("video", &video, &[("thumb", &thumb)], &ParamList::new()).unwrap();

        let file_parts: Vec<_> = body.parts().iter().filter(|p| p.is_file()).collect();
        assert_eq!(file_parts.len(), 2);
        assert_eq!(file_parts[0].name, "video");
        assert_eq!(file_parts[1].name, "thumb");
    }

    #[test]
    fn test_compose_empty_aux_is_skipped() {
        let doc = FileRef::bytes("report.pdf", vec![b'%']);
        let thumb = FileRef::id("");
        let body = compose("document", &doc, &[("thumb", &thumb)], &ParamList::new()).unwrap();

        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_compose_fields_become_text_parts() {
        let photo = FileRef::bytes("photo.jpg", vec![0xFF]);
        let mut fields = ParamList::new();
        fields.push_int("chat_id", 42);
        fields.push_text("caption", "hi");

        let body = compose("photo", &photo, &[], &fields).unwrap();

        assert_eq!(body.len(), 3);
        assert_eq!(body.parts()[1], Part::text("chat_id", "42"));
        assert_eq!(body.parts()[2], Part::text("caption", "hi"));
    }

    #[test]
    fn test_compose_rejects_empty_primary() {
        let empty_upload = FileRef::bytes("photo.jpg", Vec::new());
        let err = compose("photo", &empty_upload, &[], &ParamList::new()).unwrap_err();
        assert!(matches!(err, BotError::InvalidArgument { .. }));

        let empty_remote = FileRef::id("");
        let err = compose("photo", &empty_remote, &[], &ParamList::new()).unwrap_err();
        assert!(matches!(err, BotError::InvalidArgument { .. }));
    }

    #[test]
    fn test_upload_size_counts_file_parts_only() {
        let mut body = MultipartBody::new();
        body.push_file("photo", "photo.jpg", vec![0; 128]);
        body.push_text("caption", "hello");

        assert_eq!(body.upload_size(), 128);
    }
}
