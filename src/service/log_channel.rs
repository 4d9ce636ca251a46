//! Delivery of audit notifications to the configured log channel.
//!
//! Delivery is best-effort. The channel is resolved once when the bot connects; a
//! failed send (including one to a channel that no longer exists) is logged and the
//! notification is dropped. Nothing is retried and the calling event handler never
//! sees the error.

use serenity::all::{Channel, ChannelId, ChannelType, Context, CreateMessage};

use crate::model::notification::Notification;

/// The text channel every notification is posted to.
#[derive(Clone, Copy, Debug)]
pub struct LogChannel {
    channel_id: ChannelId,
}

impl LogChannel {
    pub fn new(channel_id: ChannelId) -> Self {
        Self { channel_id }
    }

    pub fn id(&self) -> ChannelId {
        self.channel_id
    }

    /// Looks up the channel and logs whether notifications can be posted to it.
    ///
    /// # Returns
    /// - `true` - The channel exists and is a guild channel that accepts messages
    /// - `false` - The channel could not be resolved or cannot hold messages
    pub async fn resolve(&self, ctx: &Context) -> bool {
        match self.channel_id.to_channel(ctx).await {
            Ok(Channel::Guild(channel)) if accepts_messages(channel.kind) => {
                tracing::info!("Posting notifications to #{} ({})", channel.name, channel.id);
                true
            }
            Ok(channel) => {
                tracing::error!(
                    "Log channel {} is not a guild text channel: {:?}",
                    self.channel_id,
                    channel
                );
                false
            }
            Err(e) => {
                tracing::error!(
                    "Log channel {} could not be resolved: {}",
                    self.channel_id,
                    e
                );
                false
            }
        }
    }

    /// Posts one notification as an embed.
    ///
    /// The embed footer shows the bot's username and avatar, read from the cache.
    ///
    /// # Arguments
    /// - `ctx` - Discord context providing cache and HTTP access
    /// - `notification` - The formatted notification to post
    pub async fn send(&self, ctx: &Context, notification: Notification) {
        let (footer_name, footer_icon) = {
            let user = ctx.cache.current_user();
            (user.name.clone(), user.face())
        };

        let embed = notification.to_embed(&footer_name, &footer_icon);
        let message = CreateMessage::new().embed(embed);

        match self.channel_id.send_message(&ctx.http, message).await {
            Ok(_) => {
                tracing::debug!(
                    "Posted \"{}\" to log channel {}",
                    notification.title,
                    self.channel_id
                );
            }
            Err(e) => {
                tracing::error!(
                    "Failed to post \"{}\" to log channel {}: {}",
                    notification.title,
                    self.channel_id,
                    e
                );
            }
        }
    }

    /// Posts several notifications in order, one message each.
    pub async fn send_all(&self, ctx: &Context, notifications: Vec<Notification>) {
        for notification in notifications {
            self.send(ctx, notification).await;
        }
    }

    /// Posts the notification if there is one.
    pub async fn send_some(&self, ctx: &Context, notification: Option<Notification>) {
        if let Some(notification) = notification {
            self.send(ctx, notification).await;
        }
    }
}

/// Channel kinds an embed can be posted to.
fn accepts_messages(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text
            | ChannelType::News
            | ChannelType::Voice
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
            | ChannelType::NewsThread
    )
}
