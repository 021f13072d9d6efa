//! The typed endpoint surface of the Bot API.
//!
//! [`Api`] holds the transport and the token-derived base URL; every method
//! wraps exactly one endpoint. A wrapper builds the call's parameters,
//! picks the request shape (GET query, form POST, or multipart upload),
//! hands the bytes to the transport, and converts the decoded envelope into
//! a typed result.
//!
//! File-carrying endpoints branch on [`requires_multipart`]: when every
//! reference is remote the call degrades to plain query parameters, and
//! only uploads force a multipart body.

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::file::{requires_multipart, FileRef};
use crate::http::{HttpClient, HttpTransport};
use crate::media::{resolve_group, resolve_single, InputMedia};
use crate::multipart::{compose, MultipartBody, Part};
use crate::options::*;
use crate::query::{ParamList, Params};
use crate::response::ApiResponse;
use crate::types::*;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A Telegram Bot API client.
///
/// Cheap to clone and safe to share across tasks: every call owns its own
/// request state end-to-end.
#[derive(Debug, Clone)]
pub struct Api<C = HttpClient> {
    transport: C,
    base: String,
    file_base: String,
}

impl Api<HttpClient> {
    /// Creates a new client for the given bot token with default
    /// configuration.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, Config::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(token: impl Into<String>, config: Config) -> Result<Self> {
        let base_url = config.http.base_url.clone();
        let transport = HttpClient::with_config(config)?;
        Ok(Self::with_transport(token, transport, &base_url))
    }
}

impl<C: HttpTransport> Api<C> {
    /// Creates a client over an arbitrary transport. Used by tests to
    /// exercise the request path without a network.
    pub fn with_transport(token: impl Into<String>, transport: C, base_url: &str) -> Self {
        let token = token.into();
        let base_url = base_url.trim_end_matches('/');
        Self {
            base: format!("{base_url}/bot{token}/"),
            file_base: format!("{base_url}/file/bot{token}/"),
            transport,
        }
    }

    fn method_url(&self, method: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base, method)
        } else {
            format!("{}{}?{}", self.base, method, query)
        }
    }

    /// Builds a parameter list from required fields plus optional options.
    fn collect<T: Params>(
        opts: Option<&T>,
        required: impl FnOnce(&mut ParamList),
    ) -> Result<ParamList> {
        let mut params = ParamList::new();
        required(&mut params);
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        Ok(params)
    }

    fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        let response: ApiResponse<T> = serde_json::from_slice(bytes)?;
        response.into_result()
    }

    /// Sends a method call over the GET path.
    async fn get_json<T: DeserializeOwned>(&self, method: &str, params: ParamList) -> Result<T> {
        debug!("Calling {method}");
        let url = self.method_url(method, &params.into_query());
        let bytes = self.transport.get(&url).await?;
        Self::decode(&bytes)
    }

    /// Sends a method call as a multipart POST.
    async fn post_multipart_json<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &MultipartBody,
    ) -> Result<T> {
        debug!("Calling {method} with {} parts", body.len());
        let url = self.method_url(method, "");
        let bytes = self.transport.post_multipart(&url, body).await?;
        Self::decode(&bytes)
    }

    /// Sends a file-carrying call: multipart when any reference is an
    /// upload, plain query parameters otherwise.
    async fn send_file<T: DeserializeOwned>(
        &self,
        method: &str,
        slot: &'static str,
        file: &FileRef,
        thumb: Option<&FileRef>,
        mut params: ParamList,
    ) -> Result<T> {
        if file.is_empty() {
            return Err(BotError::invalid_argument(format!(
                "missing {slot} attachment"
            )));
        }

        let refs = [Some(file), thumb];
        if requires_multipart(refs.into_iter().flatten()) {
            let mut auxiliary = Vec::new();
            if let Some(thumb) = thumb {
                auxiliary.push(("thumb", thumb));
            }
            let body = compose(slot, file, &auxiliary, &params)?;
            self.post_multipart_json(method, &body).await
        } else {
            params.push_text(slot, file.remote_value()?.to_string());
            if let Some(thumb) = thumb {
                if !thumb.is_empty() {
                    params.push_text("thumb", thumb.remote_value()?.to_string());
                }
            }
            self.get_json(method, params).await
        }
    }

    /// Sends a call whose media payload was resolved to JSON plus file
    /// parts. With no uploads the JSON travels as a query parameter.
    async fn send_media_payload<T: DeserializeOwned>(
        &self,
        method: &str,
        params: ParamList,
        files: Vec<Part>,
    ) -> Result<T> {
        if files.is_empty() {
            return self.get_json(method, params).await;
        }

        let mut body = MultipartBody::new();
        for (name, value) in params.iter() {
            body.push_text(name, value.render());
        }
        for part in files {
            body.push_part(part);
        }
        self.post_multipart_json(method, &body).await
    }

    // --- Updates and webhooks ---------------------------------------------

    /// Receives incoming updates using long polling.
    pub async fn get_updates(&self, opts: Option<&UpdateOptions>) -> Result<Vec<Update>> {
        let params = Self::collect(opts, |_| {})?;
        self.get_json("getUpdates", params).await
    }

    /// Specifies a URL to receive incoming updates via an outgoing webhook.
    pub async fn set_webhook(
        &self,
        webhook_url: &str,
        drop_pending_updates: bool,
        opts: Option<&WebhookOptions>,
    ) -> Result<bool> {
        let params = Self::collect(opts, |p| {
            p.push_bool("drop_pending_updates", drop_pending_updates);
        })?;
        let url = self.method_url("setWebhook", &params.into_query());
        let fields = [("url", webhook_url.to_string())];
        let bytes = self.transport.post_form(&url, &fields).await?;
        Self::decode(&bytes)
    }

    /// Removes the webhook integration.
    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool> {
        let params = Self::collect::<UpdateOptions>(None, |p| {
            p.push_bool("drop_pending_updates", drop_pending_updates);
        })?;
        self.get_json("deleteWebhook", params).await
    }

    /// Gets the current webhook status.
    pub async fn get_webhook_info(&self) -> Result<WebhookInfo> {
        self.get_json("getWebhookInfo", ParamList::new()).await
    }

    // --- Bot identity ------------------------------------------------------

    /// A simple method for testing the bot's auth token.
    pub async fn get_me(&self) -> Result<User> {
        self.get_json("getMe", ParamList::new()).await
    }

    /// Logs out from the cloud Bot API server before running the bot
    /// locally.
    pub async fn log_out(&self) -> Result<bool> {
        self.get_json("logOut", ParamList::new()).await
    }

    /// Closes the bot instance before moving it to another local server.
    pub async fn close(&self) -> Result<bool> {
        self.get_json("close", ParamList::new()).await
    }

    // --- Sending messages --------------------------------------------------

    /// Sends a text message.
    pub async fn send_message(
        &self,
        text: &str,
        chat_id: i64,
        opts: Option<&MessageOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| {
            p.push_text("text", text);
            p.push_int("chat_id", chat_id);
        })?;
        self.get_json("sendMessage", params).await
    }

    /// Forwards a message of any kind. Service messages can't be forwarded.
    pub async fn forward_message(
        &self,
        chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
        opts: Option<&ForwardOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("from_chat_id", from_chat_id);
            p.push_int("message_id", message_id);
        })?;
        self.get_json("forwardMessage", params).await
    }

    /// Copies a message without a link to the original.
    pub async fn copy_message(
        &self,
        chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
        opts: Option<&CopyOptions>,
    ) -> Result<MessageID> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("from_chat_id", from_chat_id);
            p.push_int("message_id", message_id);
        })?;
        self.get_json("copyMessage", params).await
    }

    /// Sends a photo.
    pub async fn send_photo(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&PhotoOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        self.send_file("sendPhoto", "photo", file, None, params)
            .await
    }

    /// Sends an audio file to be displayed in the music player. The audio
    /// must be in MP3 or M4A format.
    pub async fn send_audio(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&AudioOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        let thumb = opts.and_then(|opts| opts.thumb.as_ref());
        self.send_file("sendAudio", "audio", file, thumb, params)
            .await
    }

    /// Sends a general file.
    pub async fn send_document(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&DocumentOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        let thumb = opts.and_then(|opts| opts.thumb.as_ref());
        self.send_file("sendDocument", "document", file, thumb, params)
            .await
    }

    /// Sends an MP4 video.
    pub async fn send_video(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&VideoOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        let thumb = opts.and_then(|opts| opts.thumb.as_ref());
        self.send_file("sendVideo", "video", file, thumb, params)
            .await
    }

    /// Sends an animation (GIF or soundless H.264/MPEG-4 AVC video).
    pub async fn send_animation(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&AnimationOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        let thumb = opts.and_then(|opts| opts.thumb.as_ref());
        self.send_file("sendAnimation", "animation", file, thumb, params)
            .await
    }

    /// Sends an audio file to be displayed as a playable voice message.
    /// The audio must be an OGG file encoded with OPUS.
    pub async fn send_voice(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&VoiceOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        self.send_file("sendVoice", "voice", file, None, params)
            .await
    }

    /// Sends a video message.
    pub async fn send_video_note(
        &self,
        file: &FileRef,
        chat_id: i64,
        opts: Option<&VideoNoteOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        let thumb = opts.and_then(|opts| opts.thumb.as_ref());
        self.send_file("sendVideoNote", "video_note", file, thumb, params)
            .await
    }

    /// Sends a group of photos, videos, documents or audio files as an
    /// album. The platform accepts between 2 and 10 items per group, and
    /// documents and audio files can only be grouped with items of the same
    /// kind.
    pub async fn send_media_group(
        &self,
        chat_id: i64,
        media: &[InputMedia],
        opts: Option<&MediaGroupOptions>,
    ) -> Result<Vec<Message>> {
        if !(2..=10).contains(&media.len()) {
            return Err(BotError::invalid_argument(
                "a media group must contain between 2 and 10 items",
            ));
        }
        if let Some(item) = media.iter().find(|item| !item.is_groupable()) {
            return Err(BotError::invalid_argument(format!(
                "{} items cannot be part of a media group",
                item.kind()
            )));
        }

        let (json, files) = resolve_group(media)?;
        let mut params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        params.push_encoded_json("media", json);
        self.send_media_payload("sendMediaGroup", params, files)
            .await
    }

    /// Sends a point on the map.
    pub async fn send_location(
        &self,
        chat_id: i64,
        latitude: f64,
        longitude: f64,
        opts: Option<&LocationOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_float("latitude", latitude);
            p.push_float("longitude", longitude);
        })?;
        self.get_json("sendLocation", params).await
    }

    /// Edits a live location message. A location can be edited until its
    /// live period expires or updating is stopped explicitly.
    pub async fn edit_message_live_location(
        &self,
        msg: &MessageIDOptions,
        latitude: f64,
        longitude: f64,
        opts: Option<&EditLocationOptions>,
    ) -> Result<Message> {
        let mut params = ParamList::new();
        params.push_float("latitude", latitude);
        params.push_float("longitude", longitude);
        msg.push_params(&mut params)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("editMessageLiveLocation", params).await
    }

    /// Stops updating a live location message before its live period
    /// expires.
    pub async fn stop_message_live_location(
        &self,
        msg: &MessageIDOptions,
        opts: Option<&MessageReplyMarkup>,
    ) -> Result<Message> {
        let mut params = ParamList::new();
        msg.push_params(&mut params)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("stopMessageLiveLocation", params).await
    }

    /// Sends information about a venue.
    pub async fn send_venue(
        &self,
        chat_id: i64,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        opts: Option<&VenueOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_float("latitude", latitude);
            p.push_float("longitude", longitude);
            p.push_text("title", title);
            p.push_text("address", address);
        })?;
        self.get_json("sendVenue", params).await
    }

    /// Sends a phone contact.
    pub async fn send_contact(
        &self,
        phone_number: &str,
        first_name: &str,
        chat_id: i64,
        opts: Option<&ContactOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_text("phone_number", phone_number);
            p.push_text("first_name", first_name);
        })?;
        self.get_json("sendContact", params).await
    }

    /// Sends a native poll.
    pub async fn send_poll(
        &self,
        chat_id: i64,
        question: &str,
        answers: &[&str],
        opts: Option<&PollOptions>,
    ) -> Result<Message> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("question", question);
        params.push_json("options", &answers)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("sendPoll", params).await
    }

    /// Sends an animated emoji that displays a random value.
    pub async fn send_dice(
        &self,
        chat_id: i64,
        emoji: DiceEmoji,
        opts: Option<&BaseOptions>,
    ) -> Result<Message> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_text("emoji", emoji.as_str());
        })?;
        self.get_json("sendDice", params).await
    }

    /// Tells the user that something is happening on the bot's side. The
    /// status is shown for 5 seconds or until the bot's message arrives.
    pub async fn send_chat_action(&self, action: ChatAction, chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("action", action.as_str());
        self.get_json("sendChatAction", params).await
    }

    // --- Users and files ---------------------------------------------------

    /// Gets a list of profile pictures for a user.
    pub async fn get_user_profile_photos(
        &self,
        user_id: i64,
        opts: Option<&UserProfileOptions>,
    ) -> Result<UserProfilePhotos> {
        let params = Self::collect(opts, |p| p.push_int("user_id", user_id))?;
        self.get_json("getUserProfilePhotos", params).await
    }

    /// Returns basic info about a file and prepares it for downloading.
    /// The returned `file_path` stays valid for at least one hour.
    pub async fn get_file(&self, file_id: &str) -> Result<File> {
        let mut params = ParamList::new();
        params.push_text("file_id", file_id);
        self.get_json("getFile", params).await
    }

    /// Downloads the bytes of the file at the given path, as returned by
    /// [`Api::get_file`].
    pub async fn download_file(&self, file_path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.file_base, file_path);
        self.transport.download_with_limit(&url, u64::MAX).await
    }

    // --- Chat administration -----------------------------------------------

    /// Bans a user in a group, supergroup or channel.
    pub async fn ban_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        opts: Option<&BanOptions>,
    ) -> Result<bool> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("user_id", user_id);
        })?;
        self.get_json("banChatMember", params).await
    }

    /// Unbans a previously banned user in a supergroup or channel. Note
    /// that if the user is currently a member of the chat they are removed
    /// from it, unless `only_if_banned` is set.
    pub async fn unban_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        opts: Option<&UnbanOptions>,
    ) -> Result<bool> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("user_id", user_id);
        })?;
        self.get_json("unbanChatMember", params).await
    }

    /// Restricts a user in a supergroup.
    pub async fn restrict_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        permissions: ChatPermissions,
        opts: Option<&RestrictOptions>,
    ) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("user_id", user_id);
        params.push_json("permissions", &permissions)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("restrictChatMember", params).await
    }

    /// Promotes or demotes a user in a supergroup or channel.
    pub async fn promote_chat_member(
        &self,
        chat_id: i64,
        user_id: i64,
        opts: Option<&PromoteOptions>,
    ) -> Result<bool> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("user_id", user_id);
        })?;
        self.get_json("promoteChatMember", params).await
    }

    /// Sets a custom title for an administrator promoted by the bot.
    pub async fn set_chat_administrator_custom_title(
        &self,
        chat_id: i64,
        user_id: i64,
        custom_title: &str,
    ) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("user_id", user_id);
        params.push_text("custom_title", custom_title);
        self.get_json("setChatAdministratorCustomTitle", params)
            .await
    }

    /// Bans a channel chat in a supergroup or channel.
    pub async fn ban_chat_sender_chat(&self, chat_id: i64, sender_chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("sender_chat_id", sender_chat_id);
        self.get_json("banChatSenderChat", params).await
    }

    /// Unbans a previously banned channel chat.
    pub async fn unban_chat_sender_chat(&self, chat_id: i64, sender_chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("sender_chat_id", sender_chat_id);
        self.get_json("unbanChatSenderChat", params).await
    }

    /// Sets default chat permissions for all members.
    pub async fn set_chat_permissions(
        &self,
        chat_id: i64,
        permissions: ChatPermissions,
    ) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_json("permissions", &permissions)?;
        self.get_json("setChatPermissions", params).await
    }

    // --- Invite links ------------------------------------------------------

    /// Generates a new primary invite link; any previously generated
    /// primary link is revoked.
    pub async fn export_chat_invite_link(&self, chat_id: i64) -> Result<String> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("exportChatInviteLink", params).await
    }

    /// Creates an additional invite link for a chat.
    pub async fn create_chat_invite_link(
        &self,
        chat_id: i64,
        opts: Option<&InviteLinkOptions>,
    ) -> Result<ChatInviteLink> {
        let params = Self::collect(opts, |p| p.push_int("chat_id", chat_id))?;
        self.get_json("createChatInviteLink", params).await
    }

    /// Edits a non-primary invite link created by the bot.
    pub async fn edit_chat_invite_link(
        &self,
        chat_id: i64,
        invite_link: &str,
        opts: Option<&InviteLinkOptions>,
    ) -> Result<ChatInviteLink> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_text("invite_link", invite_link);
        })?;
        self.get_json("editChatInviteLink", params).await
    }

    /// Revokes an invite link created by the bot. Revoking the primary
    /// link generates a new one automatically.
    pub async fn revoke_chat_invite_link(
        &self,
        chat_id: i64,
        invite_link: &str,
    ) -> Result<ChatInviteLink> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("invite_link", invite_link);
        self.get_json("revokeChatInviteLink", params).await
    }

    /// Approves a chat join request.
    pub async fn approve_chat_join_request(&self, chat_id: i64, user_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("user_id", user_id);
        self.get_json("approveChatJoinRequest", params).await
    }

    /// Declines a chat join request.
    pub async fn decline_chat_join_request(&self, chat_id: i64, user_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("user_id", user_id);
        self.get_json("declineChatJoinRequest", params).await
    }

    // --- Chat settings -----------------------------------------------------

    /// Sets a new profile photo for the chat. Photos can't be changed for
    /// private chats.
    pub async fn set_chat_photo(&self, file: &FileRef, chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.send_file("setChatPhoto", "photo", file, None, params)
            .await
    }

    /// Deletes the chat photo.
    pub async fn delete_chat_photo(&self, chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("deleteChatPhoto", params).await
    }

    /// Changes the title of a chat.
    pub async fn set_chat_title(&self, chat_id: i64, title: &str) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("title", title);
        self.get_json("setChatTitle", params).await
    }

    /// Changes the description of a group, supergroup or channel.
    pub async fn set_chat_description(&self, chat_id: i64, description: &str) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("description", description);
        self.get_json("setChatDescription", params).await
    }

    /// Adds a message to the list of pinned messages in a chat.
    pub async fn pin_chat_message(
        &self,
        chat_id: i64,
        message_id: i64,
        opts: Option<&PinMessageOptions>,
    ) -> Result<bool> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("message_id", message_id);
        })?;
        self.get_json("pinChatMessage", params).await
    }

    /// Removes a message from the list of pinned messages.
    pub async fn unpin_chat_message(&self, chat_id: i64, message_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("message_id", message_id);
        self.get_json("unpinChatMessage", params).await
    }

    /// Clears the list of pinned messages in a chat.
    pub async fn unpin_all_chat_messages(&self, chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("unpinAllChatMessages", params).await
    }

    /// Makes the bot leave a group, supergroup or channel.
    pub async fn leave_chat(&self, chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("leaveChat", params).await
    }

    /// Gets up-to-date information about the chat.
    pub async fn get_chat(&self, chat_id: i64) -> Result<Chat> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("getChat", params).await
    }

    /// Gets the list of administrators in a chat.
    pub async fn get_chat_administrators(&self, chat_id: i64) -> Result<Vec<ChatMember>> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("getChatAdministrators", params).await
    }

    /// Gets the number of members in a chat.
    pub async fn get_chat_member_count(&self, chat_id: i64) -> Result<i64> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("getChatMemberCount", params).await
    }

    /// Gets information about a member of a chat.
    pub async fn get_chat_member(&self, chat_id: i64, user_id: i64) -> Result<ChatMember> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("user_id", user_id);
        self.get_json("getChatMember", params).await
    }

    /// Sets a new group sticker set for a supergroup.
    pub async fn set_chat_sticker_set(
        &self,
        chat_id: i64,
        sticker_set_name: &str,
    ) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_text("sticker_set_name", sticker_set_name);
        self.get_json("setChatStickerSet", params).await
    }

    /// Deletes the group sticker set of a supergroup.
    pub async fn delete_chat_sticker_set(&self, chat_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        self.get_json("deleteChatStickerSet", params).await
    }

    // --- Callback queries and commands -------------------------------------

    /// Answers a callback query sent from an inline keyboard.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        opts: Option<&CallbackQueryOptions>,
    ) -> Result<bool> {
        let params = Self::collect(opts, |p| {
            p.push_text("callback_query_id", callback_query_id);
        })?;
        self.get_json("answerCallbackQuery", params).await
    }

    /// Changes the list of the bot's commands for the given scope and
    /// language.
    pub async fn set_my_commands(
        &self,
        opts: Option<&CommandOptions>,
        commands: &[BotCommand],
    ) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_json("commands", &commands)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("setMyCommands", params).await
    }

    /// Deletes the bot's command list for the given scope and language.
    pub async fn delete_my_commands(&self, opts: Option<&CommandOptions>) -> Result<bool> {
        let params = Self::collect(opts, |_| {})?;
        self.get_json("deleteMyCommands", params).await
    }

    /// Gets the bot's current command list for the given scope and
    /// language.
    pub async fn get_my_commands(&self, opts: Option<&CommandOptions>) -> Result<Vec<BotCommand>> {
        let params = Self::collect(opts, |_| {})?;
        self.get_json("getMyCommands", params).await
    }

    // --- Editing messages --------------------------------------------------

    /// Edits the text of a message.
    pub async fn edit_message_text(
        &self,
        text: &str,
        msg: &MessageIDOptions,
        opts: Option<&MessageTextOptions>,
    ) -> Result<Message> {
        let mut params = ParamList::new();
        params.push_text("text", text);
        msg.push_params(&mut params)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("editMessageText", params).await
    }

    /// Edits the caption of a message.
    pub async fn edit_message_caption(
        &self,
        msg: &MessageIDOptions,
        opts: Option<&MessageCaptionOptions>,
    ) -> Result<Message> {
        let mut params = ParamList::new();
        msg.push_params(&mut params)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("editMessageCaption", params).await
    }

    /// Replaces the media of a message. When editing an inline message a
    /// new file can't be uploaded; use a file identifier or URL instead.
    pub async fn edit_message_media(
        &self,
        msg: &MessageIDOptions,
        media: &InputMedia,
        opts: Option<&MessageReplyMarkup>,
    ) -> Result<Message> {
        let (json, files) = resolve_single(media)?;
        let mut params = ParamList::new();
        msg.push_params(&mut params)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        params.push_encoded_json("media", json);
        self.send_media_payload("editMessageMedia", params, files)
            .await
    }

    /// Edits only the reply markup of a message.
    pub async fn edit_message_reply_markup(
        &self,
        msg: &MessageIDOptions,
        opts: Option<&MessageReplyMarkup>,
    ) -> Result<Message> {
        let mut params = ParamList::new();
        msg.push_params(&mut params)?;
        if let Some(opts) = opts {
            opts.push_params(&mut params)?;
        }
        self.get_json("editMessageReplyMarkup", params).await
    }

    /// Stops a poll sent by the bot.
    pub async fn stop_poll(
        &self,
        chat_id: i64,
        message_id: i64,
        opts: Option<&MessageReplyMarkup>,
    ) -> Result<Poll> {
        let params = Self::collect(opts, |p| {
            p.push_int("chat_id", chat_id);
            p.push_int("message_id", message_id);
        })?;
        self.get_json("stopPoll", params).await
    }

    /// Deletes a message. Outgoing messages can be deleted within 48 hours
    /// of being sent; further restrictions depend on the chat type and the
    /// bot's rights.
    pub async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<bool> {
        let mut params = ParamList::new();
        params.push_int("chat_id", chat_id);
        params.push_int("message_id", message_id);
        self.get_json("deleteMessage", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::InputMediaPhoto;
    use crate::multipart::PartBody;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the last request and replies with a canned body.
    struct MockTransport {
        response: Vec<u8>,
        last_url: Mutex<Option<String>>,
        last_form: Mutex<Option<Vec<(&'static str, String)>>>,
        last_body: Mutex<Option<MultipartBody>>,
    }

    impl MockTransport {
        fn replying(response: &str) -> Self {
            Self {
                response: response.as_bytes().to_vec(),
                last_url: Mutex::new(None),
                last_form: Mutex::new(None),
                last_body: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, url: &str) -> crate::error::Result<Vec<u8>> {
            *self.last_url.lock().unwrap() = Some(url.to_string());
            Ok(self.response.clone())
        }

        async fn post_form(
            &self,
            url: &str,
            fields: &[(&'static str, String)],
        ) -> crate::error::Result<Vec<u8>> {
            *self.last_url.lock().unwrap() = Some(url.to_string());
            *self.last_form.lock().unwrap() = Some(fields.to_vec());
            Ok(self.response.clone())
        }

        async fn post_multipart(
            &self,
            url: &str,
            body: &MultipartBody,
        ) -> crate::error::Result<Vec<u8>> {
            *self.last_url.lock().unwrap() = Some(url.to_string());
            *self.last_body.lock().unwrap() = Some(body.clone());
            Ok(self.response.clone())
        }

        async fn download_with_limit(
            &self,
            url: &str,
            _max_size: u64,
        ) -> crate::error::Result<Vec<u8>> {
            *self.last_url.lock().unwrap() = Some(url.to_string());
            Ok(self.response.clone())
        }
    }

    const MESSAGE_RESPONSE: &str = r#"{
        "ok": true,
        "result": {
            "message_id": 1,
            "date": 1660000000,
            "chat": {"id": 5, "type": "private", "first_name": "Ada"}
        }
    }"#;

    fn api(response: &str) -> Api<MockTransport> {
        Api::with_transport("TOKEN", MockTransport::replying(response), "http://local")
    }

    #[tokio::test]
    async fn test_send_message_builds_get_url() {
        let api = api(MESSAGE_RESPONSE);
        let message = api.send_message("hello", 5, None).await.unwrap();

        assert_eq!(message.message_id, 1);
        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert_eq!(url, "http://local/botTOKEN/sendMessage?text=hello&chat_id=5");
    }

    #[tokio::test]
    async fn test_send_message_with_options() {
        let api = api(MESSAGE_RESPONSE);
        let opts = MessageOptions {
            base: BaseOptions {
                disable_notification: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        api.send_message("hi there", 5, Some(&opts)).await.unwrap();

        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert_eq!(
            url,
            "http://local/botTOKEN/sendMessage?text=hi+there&chat_id=5&disable_notification=true"
        );
    }

    #[tokio::test]
    async fn test_send_photo_remote_degrades_to_get() {
        let api = api(MESSAGE_RESPONSE);
        let photo = FileRef::id("AgACAgIAAxk");
        api.send_photo(&photo, 5, None).await.unwrap();

        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert_eq!(
            url,
            "http://local/botTOKEN/sendPhoto?chat_id=5&photo=AgACAgIAAxk"
        );
        assert!(api.transport.last_body.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_send_photo_upload_uses_multipart() {
        let api = api(MESSAGE_RESPONSE);
        let photo = FileRef::bytes("photo.jpg", vec![0xFF, 0xD8]);
        api.send_photo(&photo, 5, None).await.unwrap();

        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert_eq!(url, "http://local/botTOKEN/sendPhoto");

        let body = api.transport.last_body.lock().unwrap().clone().unwrap();
        assert_eq!(body.len(), 2);
        assert!(body.parts()[0].is_file());
        assert_eq!(body.parts()[0].name, "photo");
        assert_eq!(body.parts()[1], Part::text("chat_id", "5"));
    }

    #[tokio::test]
    async fn test_send_video_remote_thumb_stays_scalar() {
        let api = api(MESSAGE_RESPONSE);
        let video = FileRef::bytes("clip.mp4", vec![0, 0, 0, 0x18]);
        let opts = VideoOptions {
            thumb: Some(FileRef::id("thumb-id")),
            ..Default::default()
        };
        api.send_video(&video, 5, Some(&opts)).await.unwrap();

        let body = api.transport.last_body.lock().unwrap().clone().unwrap();
        let file_parts: Vec<_> = body.parts().iter().filter(|p| p.is_file()).collect();
        assert_eq!(file_parts.len(), 1);
        assert!(body
            .parts()
            .iter()
            .any(|p| p.name == "thumb" && p.body == PartBody::Text("thumb-id".to_string())));
    }

    #[tokio::test]
    async fn test_send_empty_file_is_rejected() {
        let api = api(MESSAGE_RESPONSE);
        let err = api
            .send_photo(&FileRef::id(""), 5, None)
            .await
            .unwrap_err();
        assert!(matches!(err, BotError::InvalidArgument { .. }));
        assert!(api.transport.last_url.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_send_media_group_bounds() {
        let api = api(r#"{"ok": true, "result": []}"#);
        let one = vec![InputMedia::Photo(InputMediaPhoto::new(FileRef::id("a")))];
        assert!(api.send_media_group(5, &one, None).await.is_err());

        let eleven: Vec<_> = (0..11)
            .map(|i| InputMedia::Photo(InputMediaPhoto::new(FileRef::id(format!("f{i}")))))
            .collect();
        assert!(api.send_media_group(5, &eleven, None).await.is_err());
    }

    #[tokio::test]
    async fn test_send_media_group_mixed_refs() {
        let api = api(r#"{"ok": true, "result": []}"#);
        let media = vec![
            InputMedia::Photo(InputMediaPhoto::new(FileRef::bytes("a.jpg", vec![1]))),
            InputMedia::Photo(InputMediaPhoto::new(FileRef::url(
                "https://example.com/b.jpg",
            ))),
        ];
        api.send_media_group(5, &media, None).await.unwrap();

        let body = api.transport.last_body.lock().unwrap().clone().unwrap();
        let media_part = body
            .parts()
            .iter()
            .find(|p| p.name == "media")
            .unwrap();
        match &media_part.body {
            PartBody::Text(json) => {
                assert!(json.contains("attach://file0"));
                assert!(json.contains("https://example.com/b.jpg"));
            }
            PartBody::File { .. } => panic!("media payload must be a text part"),
        }
        assert!(body.parts().iter().any(|p| p.name == "file0" && p.is_file()));
    }

    #[tokio::test]
    async fn test_send_media_group_all_remote_degrades_to_get() {
        let api = api(r#"{"ok": true, "result": []}"#);
        let media = vec![
            InputMedia::Photo(InputMediaPhoto::new(FileRef::id("a"))),
            InputMedia::Photo(InputMediaPhoto::new(FileRef::id("b"))),
        ];
        api.send_media_group(5, &media, None).await.unwrap();

        assert!(api.transport.last_body.lock().unwrap().is_none());
        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert!(url.starts_with("http://local/botTOKEN/sendMediaGroup?chat_id=5&media="));
    }

    #[tokio::test]
    async fn test_api_error_is_surfaced() {
        let api = api(r#"{"ok": false, "error_code": 403, "description": "Forbidden"}"#);
        let err = api.send_message("hello", 5, None).await.unwrap_err();

        match err {
            BotError::Api { code, description } => {
                assert_eq!(code, 403);
                assert_eq!(description, "Forbidden");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_set_webhook_posts_form() {
        let api = api(r#"{"ok": true, "result": true}"#);
        assert!(api
            .set_webhook("https://example.com/hook", true, None)
            .await
            .unwrap());

        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert_eq!(
            url,
            "http://local/botTOKEN/setWebhook?drop_pending_updates=true"
        );
        let form = api.transport.last_form.lock().unwrap().clone().unwrap();
        assert_eq!(form, vec![("url", "https://example.com/hook".to_string())]);
    }

    #[tokio::test]
    async fn test_download_file_uses_file_base() {
        let api = api("raw-bytes");
        let bytes = api.download_file("photos/file_0.jpg").await.unwrap();

        assert_eq!(bytes, b"raw-bytes");
        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert_eq!(url, "http://local/file/botTOKEN/photos/file_0.jpg");
    }

    #[tokio::test]
    async fn test_get_me_decodes_user() {
        let api = api(
            r#"{"ok": true, "result": {"id": 42, "is_bot": true, "first_name": "examplebot"}}"#,
        );
        let me = api.get_me().await.unwrap();
        assert_eq!(me.id, 42);
        assert!(me.is_bot);
    }

    #[tokio::test]
    async fn test_edit_message_media_inline_remote() {
        let api = api(MESSAGE_RESPONSE);
        let media = InputMedia::Photo(InputMediaPhoto::new(FileRef::id("photo-id")));
        let msg = MessageIDOptions::inline("inline-1");
        api.edit_message_media(&msg, &media, None).await.unwrap();

        // no upload: the media JSON travels as a query parameter
        assert!(api.transport.last_body.lock().unwrap().is_none());
        let url = api.transport.last_url.lock().unwrap().clone().unwrap();
        assert!(url.contains("inline_message_id=inline-1"));
        assert!(url.contains("media="));
    }
}
