//! Query-string serialization for per-call option values.
//!
//! Every endpoint accepts a set of optional parameters. Each options type
//! implements [`Params`] and pushes its set fields, in declaration order,
//! into a [`ParamList`]; fields left unset never reach the wire. The list
//! then renders to a percent-encoded query string for the GET path, or is
//! spliced into a multipart body as scalar text parts for the upload path.

use crate::error::Result;
use serde::Serialize;
use url::form_urlencoded;

/// A single parameter value with its wire-encoding kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// A structured value already encoded as compact JSON.
    Json(String),
}

impl ParamValue {
    /// Renders the value as it appears on the wire, before percent-encoding.
    ///
    /// Numbers use a locale-independent decimal format; floats are printed
    /// in fixed-point notation so identical inputs always produce identical
    /// request URLs.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Text(text) => text.clone(),
            ParamValue::Integer(value) => value.to_string(),
            ParamValue::Float(value) => value.to_string(),
            ParamValue::Bool(value) => value.to_string(),
            ParamValue::Json(json) => json.clone(),
        }
    }
}

/// An ordered list of named parameters produced by one options value.
///
/// Push order is preserved end-to-end, which keeps serialization
/// deterministic and testable.
#[derive(Debug, Clone, Default)]
pub struct ParamList {
    params: Vec<(&'static str, ParamValue)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a text parameter. Empty strings are dropped, matching the
    /// omission rule for unset fields.
    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.params.push((name, ParamValue::Text(value)));
        }
    }

    pub fn push_int(&mut self, name: &'static str, value: i64) {
        self.params.push((name, ParamValue::Integer(value)));
    }

    pub fn push_float(&mut self, name: &'static str, value: f64) {
        self.params.push((name, ParamValue::Float(value)));
    }

    pub fn push_bool(&mut self, name: &'static str, value: bool) {
        self.params.push((name, ParamValue::Bool(value)));
    }

    /// Encodes a structured value as compact JSON and pushes it as a single
    /// scalar parameter.
    pub fn push_json<T: Serialize>(&mut self, name: &'static str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.params.push((name, ParamValue::Json(json)));
        Ok(())
    }

    /// Pushes a value that is already encoded as JSON.
    pub fn push_encoded_json(&mut self, name: &'static str, json: impl Into<String>) {
        self.params.push((name, ParamValue::Json(json.into())));
    }

    /// Pushes a text parameter only when the field is set.
    pub fn opt_text(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.push_text(name, value);
        }
    }

    pub fn opt_int(&mut self, name: &'static str, value: Option<i64>) {
        if let Some(value) = value {
            self.push_int(name, value);
        }
    }

    pub fn opt_float(&mut self, name: &'static str, value: Option<f64>) {
        if let Some(value) = value {
            self.push_float(name, value);
        }
    }

    pub fn opt_bool(&mut self, name: &'static str, value: Option<bool>) {
        if let Some(value) = value {
            self.push_bool(name, value);
        }
    }

    /// Pushes a JSON-encoded parameter only when the field is set.
    pub fn opt_json<T: Serialize>(&mut self, name: &'static str, value: Option<&T>) -> Result<()> {
        if let Some(value) = value {
            self.push_json(name, value)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over the parameters in push order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.params.iter().map(|(name, value)| (*name, value))
    }

    /// Renders the parameters into `(name, value)` string pairs, preserving
    /// push order. Used by the form-encoded POST path.
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.params
            .into_iter()
            .map(|(name, value)| (name, value.render()))
            .collect()
    }

    /// Renders the list as a percent-encoded query string.
    pub fn into_query(self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            serializer.append_pair(name, &value.render());
        }
        serializer.finish()
    }
}

/// Produces the wire parameters for one endpoint's options.
///
/// Implementations push their fields in declaration order and skip unset
/// fields entirely. A type that embeds another options value flattens it by
/// calling the inner `push_params` into the same list — nested options never
/// introduce a key prefix.
pub trait Params {
    fn push_params(&self, params: &mut ParamList) -> Result<()>;
}

/// Serializes an options value into a query string.
///
/// `None` yields an empty string so wrappers can splice the result into a
/// URL unconditionally. Serialization only fails when a structured field
/// cannot be JSON-encoded.
pub fn serialize<T: Params>(opts: Option<&T>) -> Result<String> {
    match opts {
        Some(opts) => {
            let mut params = ParamList::new();
            opts.push_params(&mut params)?;
            Ok(params.into_query())
        }
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CaptionOptions {
        caption: Option<String>,
        show_above: Option<bool>,
        entities: Option<Vec<String>>,
    }

    impl Params for CaptionOptions {
        fn push_params(&self, params: &mut ParamList) -> Result<()> {
            params.opt_text("caption", self.caption.as_deref());
            params.opt_bool("show_caption_above_media", self.show_above);
            params.opt_json("caption_entities", self.entities.as_ref())?;
            Ok(())
        }
    }

    #[test]
    fn test_serialize_none_is_empty() {
        let query = serialize::<CaptionOptions>(None).unwrap();
        assert_eq!(query, "");
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let opts = CaptionOptions {
            caption: Some("hi".to_string()),
            show_above: None,
            entities: None,
        };

        let query = serialize(Some(&opts)).unwrap();
        assert_eq!(query, "caption=hi");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let opts = CaptionOptions {
            caption: Some("hello world".to_string()),
            show_above: Some(true),
            entities: Some(vec!["bold".to_string()]),
        };

        let first = serialize(Some(&opts)).unwrap();
        let second = serialize(Some(&opts)).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "caption=hello+world&show_caption_above_media=true&caption_entities=%5B%22bold%22%5D"
        );
    }

    #[test]
    fn test_empty_text_is_dropped() {
        let mut params = ParamList::new();
        params.push_text("caption", "");
        params.push_text("title", "set");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_float_rendering_is_fixed_point() {
        assert_eq!(ParamValue::Float(45.5).render(), "45.5");
        assert_eq!(ParamValue::Float(0.000001).render(), "0.000001");
        assert_eq!(ParamValue::Float(-12.0).render(), "-12");
    }

    #[test]
    fn test_json_fields_are_compact() {
        let mut params = ParamList::new();
        params
            .push_json("allowed_updates", &vec!["message", "callback_query"])
            .unwrap();

        let (name, value) = params.iter().next().unwrap();
        assert_eq!(name, "allowed_updates");
        assert_eq!(
            value.render(),
            r#"["message","callback_query"]"#
        );
    }

    #[test]
    fn test_nested_options_flatten() {
        struct Inner {
            silent: Option<bool>,
        }
        struct Outer {
            text: Option<String>,
            inner: Inner,
        }

        impl Params for Inner {
            fn push_params(&self, params: &mut ParamList) -> Result<()> {
                params.opt_bool("disable_notification", self.silent);
                Ok(())
            }
        }

        impl Params for Outer {
            fn push_params(&self, params: &mut ParamList) -> Result<()> {
                params.opt_text("text", self.text.as_deref());
                self.inner.push_params(params)
            }
        }

        let outer = Outer {
            text: Some("hey".to_string()),
            inner: Inner { silent: Some(true) },
        };

        let query = serialize(Some(&outer)).unwrap();
        assert_eq!(query, "text=hey&disable_notification=true");
    }

    #[test]
    fn test_into_pairs_preserves_order() {
        let mut params = ParamList::new();
        params.push_int("chat_id", 42);
        params.push_text("text", "hi");
        params.push_float("latitude", 1.25);

        let pairs = params.into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("chat_id", "42".to_string()),
                ("text", "hi".to_string()),
                ("latitude", "1.25".to_string()),
            ]
        );
    }
}
