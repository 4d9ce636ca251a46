use std::collections::HashMap;

use serenity::all::{
    ChannelId, Context, Emoji, EmojiId, EventHandler, Guild, GuildChannel, GuildId,
    GuildMemberUpdateEvent, Interaction, Member, Message, MessageId, MessageUpdateEvent,
    OnlineStatus, PartialGuildChannel, Reaction, Ready, Role, RoleId, Sticker, StickerId,
    UnavailableGuild, User,
};
use serenity::async_trait;

use crate::service::{log_channel::LogChannel, snapshot::ExpressionSnapshots};

pub mod channel;
pub mod expression;
pub mod guild;
pub mod interaction;
pub mod lookup;
pub mod member;
pub mod message;
pub mod ready;
pub mod reaction;
pub mod role;
pub mod thread;

/// Discord bot event handler
pub struct Handler {
    pub log_channel: LogChannel,
    pub presence: String,
    pub status: OnlineStatus,
    pub snapshots: ExpressionSnapshots,
}

impl Handler {
    pub fn new(log_channel: LogChannel, presence: String, status: OnlineStatus) -> Self {
        Self {
            log_channel,
            presence,
            status,
            snapshots: ExpressionSnapshots::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.log_channel, &self.presence, self.status, ctx, ready).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(ctx, interaction).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.snapshots, ctx, guild, is_new).await;
    }

    /// Called when a guild becomes unavailable or the bot leaves it
    async fn guild_delete(
        &self,
        ctx: Context,
        incomplete: UnavailableGuild,
        _full: Option<Guild>,
    ) {
        guild::handle_guild_delete(&self.snapshots, ctx, incomplete).await;
    }

    /// Called when a guild's integrations change
    async fn guild_integrations_update(&self, ctx: Context, guild_id: GuildId) {
        guild::handle_integrations_update(&self.log_channel, ctx, guild_id).await;
    }

    /// Called when a guild's emojis are created, updated or deleted
    async fn guild_emojis_update(
        &self,
        ctx: Context,
        guild_id: GuildId,
        current_state: HashMap<EmojiId, Emoji>,
    ) {
        expression::handle_emojis_update(
            &self.log_channel,
            &self.snapshots,
            ctx,
            guild_id,
            current_state,
        )
        .await;
    }

    /// Called when a guild's stickers are created, updated or deleted
    async fn guild_stickers_update(
        &self,
        ctx: Context,
        guild_id: GuildId,
        current_state: HashMap<StickerId, Sticker>,
    ) {
        expression::handle_stickers_update(
            &self.log_channel,
            &self.snapshots,
            ctx,
            guild_id,
            current_state,
        )
        .await;
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, ctx: Context, new: Role) {
        role::handle_guild_role_create(&self.log_channel, ctx, new).await;
    }

    /// Called when a role is updated in a guild
    async fn guild_role_update(&self, ctx: Context, old: Option<Role>, new: Role) {
        role::handle_guild_role_update(&self.log_channel, ctx, old, new).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            &self.log_channel,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.log_channel, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.log_channel,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.log_channel, ctx, old, new, event).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(&self.log_channel, ctx, channel).await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(&self.log_channel, ctx, old, new).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.log_channel, ctx, channel, messages).await;
    }

    /// Called when a category is created in a guild
    async fn category_create(&self, ctx: Context, category: GuildChannel) {
        channel::handle_channel_create(&self.log_channel, ctx, category).await;
    }

    /// Called when a category is deleted from a guild
    async fn category_delete(&self, ctx: Context, category: GuildChannel) {
        channel::handle_channel_delete(&self.log_channel, ctx, category, None).await;
    }

    /// Called when a thread is created
    async fn thread_create(&self, ctx: Context, thread: GuildChannel) {
        thread::handle_thread_create(&self.log_channel, ctx, thread).await;
    }

    /// Called when a thread is updated
    async fn thread_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        thread::handle_thread_update(&self.log_channel, ctx, old, new).await;
    }

    /// Called when a thread is deleted
    async fn thread_delete(
        &self,
        ctx: Context,
        thread: PartialGuildChannel,
        full_thread_data: Option<GuildChannel>,
    ) {
        thread::handle_thread_delete(&self.log_channel, ctx, thread, full_thread_data).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.log_channel, ctx, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(&self.log_channel, ctx, removed_reaction).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(
            &self.log_channel,
            ctx,
            channel_id,
            deleted_message_id,
            guild_id,
        )
        .await;
    }

    /// Called when several messages are deleted at once
    async fn message_delete_bulk(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete_bulk(
            &self.log_channel,
            ctx,
            channel_id,
            multiple_deleted_messages_ids,
            guild_id,
        )
        .await;
    }

    /// Called when a message is edited, pinned or unpinned
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(&self.log_channel, ctx, old_if_available, new, event)
            .await;
    }
}
