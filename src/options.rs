//! Per-endpoint option values.
//!
//! Every endpoint family has one struct of optional parameters. Each
//! implements [`Params`] by pushing its set fields in declaration order, so
//! the wire encoding is deterministic and unset fields are never emitted.
//! Structs that share the common sending options embed [`BaseOptions`] and
//! flatten it into their own parameter list.
//!
//! Thumbnail fields hold a [`FileRef`] rather than a scalar: they are not
//! query parameters and are routed through the multipart composer (or
//! degraded to a scalar field when remote) by the endpoint wrappers.

use crate::error::Result;
use crate::file::FileRef;
use crate::query::{ParamList, Params};
use crate::types::{
    BotCommandScope, InlineKeyboardMarkup, MessageEntity, ParseMode, ReplyMarkup,
};

/// Options shared by most send endpoints.
#[derive(Debug, Clone, Default)]
pub struct BaseOptions {
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub allow_sending_without_reply: Option<bool>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl Params for BaseOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("disable_notification", self.disable_notification);
        params.opt_bool("protect_content", self.protect_content);
        params.opt_int("reply_to_message_id", self.reply_to_message_id);
        params.opt_bool(
            "allow_sending_without_reply",
            self.allow_sending_without_reply,
        );
        params.opt_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(())
    }
}

/// Options for `getUpdates`.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub timeout: Option<i64>,
    pub allowed_updates: Option<Vec<String>>,
}

impl Params for UpdateOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("offset", self.offset);
        params.opt_int("limit", self.limit);
        params.opt_int("timeout", self.timeout);
        params.opt_json("allowed_updates", self.allowed_updates.as_ref())?;
        Ok(())
    }
}

/// Options for `setWebhook`.
#[derive(Debug, Clone, Default)]
pub struct WebhookOptions {
    pub ip_address: Option<String>,
    pub max_connections: Option<i64>,
    pub allowed_updates: Option<Vec<String>>,
    pub secret_token: Option<String>,
}

impl Params for WebhookOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("ip_address", self.ip_address.as_deref());
        params.opt_int("max_connections", self.max_connections);
        params.opt_json("allowed_updates", self.allowed_updates.as_ref())?;
        params.opt_text("secret_token", self.secret_token.as_deref());
        Ok(())
    }
}

/// Options for `sendMessage`.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: Option<bool>,
    pub base: BaseOptions,
}

impl Params for MessageOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("entities", self.entities.as_ref())?;
        params.opt_bool("disable_web_page_preview", self.disable_web_page_preview);
        self.base.push_params(params)
    }
}

/// Options for `forwardMessage`.
#[derive(Debug, Clone, Default)]
pub struct ForwardOptions {
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
}

impl Params for ForwardOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("disable_notification", self.disable_notification);
        params.opt_bool("protect_content", self.protect_content);
        Ok(())
    }
}

/// Options for `copyMessage`.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub base: BaseOptions,
}

impl Params for CopyOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        self.base.push_params(params)
    }
}

/// Options for `sendPhoto`.
#[derive(Debug, Clone, Default)]
pub struct PhotoOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub base: BaseOptions,
}

impl Params for PhotoOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        self.base.push_params(params)
    }
}

/// Options for `sendAudio`.
#[derive(Debug, Clone, Default)]
pub struct AudioOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<i64>,
    pub performer: Option<String>,
    pub title: Option<String>,
    /// Cover image, sent as a second attachment.
    pub thumb: Option<FileRef>,
    pub base: BaseOptions,
}

impl Params for AudioOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        params.opt_int("duration", self.duration);
        params.opt_text("performer", self.performer.as_deref());
        params.opt_text("title", self.title.as_deref());
        self.base.push_params(params)
    }
}

/// Options for `sendDocument`.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub disable_content_type_detection: Option<bool>,
    pub thumb: Option<FileRef>,
    pub base: BaseOptions,
}

impl Params for DocumentOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        params.opt_bool(
            "disable_content_type_detection",
            self.disable_content_type_detection,
        );
        self.base.push_params(params)
    }
}

/// Options for `sendVideo`.
#[derive(Debug, Clone, Default)]
pub struct VideoOptions {
    pub duration: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub supports_streaming: Option<bool>,
    pub thumb: Option<FileRef>,
    pub base: BaseOptions,
}

impl Params for VideoOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("duration", self.duration);
        params.opt_int("width", self.width);
        params.opt_int("height", self.height);
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        params.opt_bool("supports_streaming", self.supports_streaming);
        self.base.push_params(params)
    }
}

/// Options for `sendAnimation`.
#[derive(Debug, Clone, Default)]
pub struct AnimationOptions {
    pub duration: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub thumb: Option<FileRef>,
    pub base: BaseOptions,
}

impl Params for AnimationOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("duration", self.duration);
        params.opt_int("width", self.width);
        params.opt_int("height", self.height);
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        self.base.push_params(params)
    }
}

/// Options for `sendVoice`.
#[derive(Debug, Clone, Default)]
pub struct VoiceOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<i64>,
    pub base: BaseOptions,
}

impl Params for VoiceOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        params.opt_int("duration", self.duration);
        self.base.push_params(params)
    }
}

/// Options for `sendVideoNote`.
#[derive(Debug, Clone, Default)]
pub struct VideoNoteOptions {
    pub duration: Option<i64>,
    pub length: Option<i64>,
    pub thumb: Option<FileRef>,
    pub base: BaseOptions,
}

impl Params for VideoNoteOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("duration", self.duration);
        params.opt_int("length", self.length);
        self.base.push_params(params)
    }
}

/// Options for `sendMediaGroup`.
#[derive(Debug, Clone, Default)]
pub struct MediaGroupOptions {
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub allow_sending_without_reply: Option<bool>,
}

impl Params for MediaGroupOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("disable_notification", self.disable_notification);
        params.opt_bool("protect_content", self.protect_content);
        params.opt_int("reply_to_message_id", self.reply_to_message_id);
        params.opt_bool(
            "allow_sending_without_reply",
            self.allow_sending_without_reply,
        );
        Ok(())
    }
}

/// Options for `sendLocation`.
#[derive(Debug, Clone, Default)]
pub struct LocationOptions {
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i64>,
    pub heading: Option<i64>,
    pub proximity_alert_radius: Option<i64>,
    pub base: BaseOptions,
}

impl Params for LocationOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_float("horizontal_accuracy", self.horizontal_accuracy);
        params.opt_int("live_period", self.live_period);
        params.opt_int("heading", self.heading);
        params.opt_int("proximity_alert_radius", self.proximity_alert_radius);
        self.base.push_params(params)
    }
}

/// Options for `editMessageLiveLocation`.
#[derive(Debug, Clone, Default)]
pub struct EditLocationOptions {
    pub horizontal_accuracy: Option<f64>,
    pub heading: Option<i64>,
    pub proximity_alert_radius: Option<i64>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Params for EditLocationOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_float("horizontal_accuracy", self.horizontal_accuracy);
        params.opt_int("heading", self.heading);
        params.opt_int("proximity_alert_radius", self.proximity_alert_radius);
        params.opt_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(())
    }
}

/// Options for `sendVenue`.
#[derive(Debug, Clone, Default)]
pub struct VenueOptions {
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
    pub base: BaseOptions,
}

impl Params for VenueOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("foursquare_id", self.foursquare_id.as_deref());
        params.opt_text("foursquare_type", self.foursquare_type.as_deref());
        params.opt_text("google_place_id", self.google_place_id.as_deref());
        params.opt_text("google_place_type", self.google_place_type.as_deref());
        self.base.push_params(params)
    }
}

/// Options for `sendContact`.
#[derive(Debug, Clone, Default)]
pub struct ContactOptions {
    pub last_name: Option<String>,
    pub vcard: Option<String>,
    pub base: BaseOptions,
}

impl Params for ContactOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("last_name", self.last_name.as_deref());
        params.opt_text("vcard", self.vcard.as_deref());
        self.base.push_params(params)
    }
}

/// Options for `sendPoll`.
#[derive(Debug, Clone, Default)]
pub struct PollOptions {
    pub is_anonymous: Option<bool>,
    /// "regular" or "quiz".
    pub kind: Option<String>,
    pub allows_multiple_answers: Option<bool>,
    pub correct_option_id: Option<i64>,
    pub explanation: Option<String>,
    pub explanation_parse_mode: Option<ParseMode>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i64>,
    pub close_date: Option<i64>,
    pub is_closed: Option<bool>,
    pub base: BaseOptions,
}

impl Params for PollOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("is_anonymous", self.is_anonymous);
        params.opt_text("type", self.kind.as_deref());
        params.opt_bool("allows_multiple_answers", self.allows_multiple_answers);
        params.opt_int("correct_option_id", self.correct_option_id);
        params.opt_text("explanation", self.explanation.as_deref());
        if let Some(mode) = self.explanation_parse_mode {
            params.push_text("explanation_parse_mode", mode.to_string());
        }
        params.opt_json("explanation_entities", self.explanation_entities.as_ref())?;
        params.opt_int("open_period", self.open_period);
        params.opt_int("close_date", self.close_date);
        params.opt_bool("is_closed", self.is_closed);
        self.base.push_params(params)
    }
}

/// Options for `banChatMember`.
#[derive(Debug, Clone, Default)]
pub struct BanOptions {
    pub until_date: Option<i64>,
    pub revoke_messages: Option<bool>,
}

impl Params for BanOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("until_date", self.until_date);
        params.opt_bool("revoke_messages", self.revoke_messages);
        Ok(())
    }
}

/// Options for `unbanChatMember`.
#[derive(Debug, Clone, Default)]
pub struct UnbanOptions {
    pub only_if_banned: Option<bool>,
}

impl Params for UnbanOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("only_if_banned", self.only_if_banned);
        Ok(())
    }
}

/// Options for `restrictChatMember`.
#[derive(Debug, Clone, Default)]
pub struct RestrictOptions {
    pub until_date: Option<i64>,
}

impl Params for RestrictOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("until_date", self.until_date);
        Ok(())
    }
}

/// Options for `promoteChatMember`.
#[derive(Debug, Clone, Default)]
pub struct PromoteOptions {
    pub is_anonymous: Option<bool>,
    pub can_manage_chat: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_manage_video_chats: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_promote_members: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
}

impl Params for PromoteOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("is_anonymous", self.is_anonymous);
        params.opt_bool("can_manage_chat", self.can_manage_chat);
        params.opt_bool("can_post_messages", self.can_post_messages);
        params.opt_bool("can_edit_messages", self.can_edit_messages);
        params.opt_bool("can_delete_messages", self.can_delete_messages);
        params.opt_bool("can_manage_video_chats", self.can_manage_video_chats);
        params.opt_bool("can_restrict_members", self.can_restrict_members);
        params.opt_bool("can_promote_members", self.can_promote_members);
        params.opt_bool("can_change_info", self.can_change_info);
        params.opt_bool("can_invite_users", self.can_invite_users);
        params.opt_bool("can_pin_messages", self.can_pin_messages);
        Ok(())
    }
}

/// Options for `createChatInviteLink` and `editChatInviteLink`.
#[derive(Debug, Clone, Default)]
pub struct InviteLinkOptions {
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<i64>,
    pub creates_join_request: Option<bool>,
}

impl Params for InviteLinkOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("name", self.name.as_deref());
        params.opt_int("expire_date", self.expire_date);
        params.opt_int("member_limit", self.member_limit);
        params.opt_bool("creates_join_request", self.creates_join_request);
        Ok(())
    }
}

/// Options for `pinChatMessage`.
#[derive(Debug, Clone, Default)]
pub struct PinMessageOptions {
    pub disable_notification: Option<bool>,
}

impl Params for PinMessageOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_bool("disable_notification", self.disable_notification);
        Ok(())
    }
}

/// Options for `answerCallbackQuery`.
#[derive(Debug, Clone, Default)]
pub struct CallbackQueryOptions {
    pub text: Option<String>,
    pub show_alert: Option<bool>,
    pub url: Option<String>,
    pub cache_time: Option<i64>,
}

impl Params for CallbackQueryOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("text", self.text.as_deref());
        params.opt_bool("show_alert", self.show_alert);
        params.opt_text("url", self.url.as_deref());
        params.opt_int("cache_time", self.cache_time);
        Ok(())
    }
}

/// Options for the `setMyCommands` family.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    pub scope: Option<BotCommandScope>,
    pub language_code: Option<String>,
}

impl Params for CommandOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_json("scope", self.scope.as_ref())?;
        params.opt_text("language_code", self.language_code.as_deref());
        Ok(())
    }
}

/// Options for `getUserProfilePhotos`.
#[derive(Debug, Clone, Default)]
pub struct UserProfileOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Params for UserProfileOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_int("offset", self.offset);
        params.opt_int("limit", self.limit);
        Ok(())
    }
}

/// Addresses the message an edit applies to: either a chat message or an
/// inline message.
#[derive(Debug, Clone)]
pub enum MessageIDOptions {
    Chat { chat_id: i64, message_id: i64 },
    Inline { inline_message_id: String },
}

impl MessageIDOptions {
    pub fn chat(chat_id: i64, message_id: i64) -> Self {
        MessageIDOptions::Chat {
            chat_id,
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        MessageIDOptions::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }
}

impl Params for MessageIDOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        match self {
            MessageIDOptions::Chat {
                chat_id,
                message_id,
            } => {
                params.push_int("chat_id", *chat_id);
                params.push_int("message_id", *message_id);
            }
            MessageIDOptions::Inline { inline_message_id } => {
                params.push_text("inline_message_id", inline_message_id.clone());
            }
        }
        Ok(())
    }
}

/// Options for `editMessageText`.
#[derive(Debug, Clone, Default)]
pub struct MessageTextOptions {
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Params for MessageTextOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("entities", self.entities.as_ref())?;
        params.opt_bool("disable_web_page_preview", self.disable_web_page_preview);
        params.opt_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(())
    }
}

/// Options for `editMessageCaption`.
#[derive(Debug, Clone, Default)]
pub struct MessageCaptionOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Params for MessageCaptionOptions {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_text("caption", self.caption.as_deref());
        if let Some(mode) = self.parse_mode {
            params.push_text("parse_mode", mode.to_string());
        }
        params.opt_json("caption_entities", self.caption_entities.as_ref())?;
        params.opt_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(())
    }
}

/// A bare inline-keyboard update, used by the edit endpoints that accept
/// nothing else.
#[derive(Debug, Clone, Default)]
pub struct MessageReplyMarkup {
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Params for MessageReplyMarkup {
    fn push_params(&self, params: &mut ParamList) -> Result<()> {
        params.opt_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::serialize;
    use crate::types::InlineKeyboardButton;

    #[test]
    fn test_caption_only_options() {
        let opts = PhotoOptions {
            caption: Some("hi".to_string()),
            ..Default::default()
        };

        assert_eq!(serialize(Some(&opts)).unwrap(), "caption=hi");
    }

    #[test]
    fn test_default_options_serialize_empty() {
        assert_eq!(serialize(Some(&MessageOptions::default())).unwrap(), "");
        assert_eq!(serialize(Some(&PollOptions::default())).unwrap(), "");
        assert_eq!(serialize(Some(&PromoteOptions::default())).unwrap(), "");
    }

    #[test]
    fn test_base_options_flatten_without_prefix() {
        let opts = MessageOptions {
            disable_web_page_preview: Some(true),
            base: BaseOptions {
                disable_notification: Some(true),
                reply_to_message_id: Some(99),
                ..Default::default()
            },
            ..Default::default()
        };

        let query = serialize(Some(&opts)).unwrap();
        assert_eq!(
            query,
            "disable_web_page_preview=true&disable_notification=true&reply_to_message_id=99"
        );
    }

    #[test]
    fn test_reply_markup_is_json_encoded() {
        let opts = MessageOptions {
            base: BaseOptions {
                reply_markup: Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup {
                    inline_keyboard: vec![vec![InlineKeyboardButton::callback("Go", "go")]],
                })),
                ..Default::default()
            },
            ..Default::default()
        };

        let query = serialize(Some(&opts)).unwrap();
        assert!(query.starts_with("reply_markup=%7B%22inline_keyboard%22"));
    }

    #[test]
    fn test_thumb_is_not_a_query_parameter() {
        let opts = VideoOptions {
            duration: Some(30),
            thumb: Some(FileRef::bytes("cover.jpg", vec![0xFF])),
            ..Default::default()
        };

        assert_eq!(serialize(Some(&opts)).unwrap(), "duration=30");
    }

    #[test]
    fn test_message_id_options_variants() {
        let chat = MessageIDOptions::chat(5, 10);
        assert_eq!(
            serialize(Some(&chat)).unwrap(),
            "chat_id=5&message_id=10"
        );

        let inline = MessageIDOptions::inline("abc123");
        assert_eq!(
            serialize(Some(&inline)).unwrap(),
            "inline_message_id=abc123"
        );
    }

    #[test]
    fn test_poll_kind_uses_wire_name() {
        let opts = PollOptions {
            kind: Some("quiz".to_string()),
            correct_option_id: Some(1),
            ..Default::default()
        };

        assert_eq!(
            serialize(Some(&opts)).unwrap(),
            "type=quiz&correct_option_id=1"
        );
    }

    #[test]
    fn test_command_scope_is_json_encoded() {
        let opts = CommandOptions {
            scope: Some(BotCommandScope::AllGroupChats),
            language_code: Some("en".to_string()),
        };

        let query = serialize(Some(&opts)).unwrap();
        assert_eq!(
            query,
            "scope=%7B%22type%22%3A%22all_group_chats%22%7D&language_code=en"
        );
    }
}
