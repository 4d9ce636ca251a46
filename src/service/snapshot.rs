//! Last-seen emoji and sticker sets per guild.
//!
//! The gateway reports emoji and sticker changes as the guild's complete current set,
//! so the previous set has to be remembered here to work out what changed. Sets are
//! seeded when a guild becomes available and replaced on every update.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{Emoji, EmojiId, GuildId, Sticker, StickerId};
use tokio::sync::RwLock;

pub type EmojiSet = HashMap<EmojiId, Emoji>;
pub type StickerSet = HashMap<StickerId, Sticker>;

#[derive(Default)]
struct Snapshots {
    emojis: HashMap<GuildId, EmojiSet>,
    stickers: HashMap<GuildId, StickerSet>,
}

/// Shared store of the last-seen expression sets.
///
/// Cloning is cheap; every clone refers to the same store.
#[derive(Clone, Default)]
pub struct ExpressionSnapshots {
    inner: Arc<RwLock<Snapshots>>,
}

impl ExpressionSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the guild's current sets, replacing anything previously known.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the sets belong to
    /// - `emojis` - Every emoji of the guild
    /// - `stickers` - Every sticker of the guild
    pub async fn seed(&self, guild_id: GuildId, emojis: EmojiSet, stickers: StickerSet) {
        let mut snapshots = self.inner.write().await;
        snapshots.emojis.insert(guild_id, emojis);
        snapshots.stickers.insert(guild_id, stickers);
    }

    /// Stores the guild's new emoji set.
    ///
    /// # Returns
    /// - `Some(EmojiSet)` - The set seen before this update
    /// - `None` - Nothing was known for the guild yet
    pub async fn replace_emojis(&self, guild_id: GuildId, current: EmojiSet) -> Option<EmojiSet> {
        self.inner.write().await.emojis.insert(guild_id, current)
    }

    /// Stores the guild's new sticker set.
    ///
    /// # Returns
    /// - `Some(StickerSet)` - The set seen before this update
    /// - `None` - Nothing was known for the guild yet
    pub async fn replace_stickers(
        &self,
        guild_id: GuildId,
        current: StickerSet,
    ) -> Option<StickerSet> {
        self.inner.write().await.stickers.insert(guild_id, current)
    }

    /// Forgets everything stored for a guild the bot is no longer in.
    pub async fn remove(&self, guild_id: GuildId) {
        let mut snapshots = self.inner.write().await;
        snapshots.emojis.remove(&guild_id);
        snapshots.stickers.remove(&guild_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_emoji, create_test_sticker, TEST_GUILD_ID};

    fn emoji_set(ids: &[u64]) -> EmojiSet {
        ids.iter()
            .map(|id| {
                let emoji = create_test_emoji(*id, "wave", None);
                (emoji.id, emoji)
            })
            .collect()
    }

    /// Tests that the first update for an unknown guild has nothing to compare against.
    ///
    /// Expected: None, then the first set on the following update
    #[tokio::test]
    async fn first_emoji_update_returns_none() {
        let snapshots = ExpressionSnapshots::new();
        let guild_id = GuildId::new(TEST_GUILD_ID);

        let first = snapshots.replace_emojis(guild_id, emoji_set(&[1])).await;
        let second = snapshots.replace_emojis(guild_id, emoji_set(&[1, 2])).await;

        assert!(first.is_none());
        assert_eq!(second.map(|set| set.len()), Some(1));
    }

    /// Tests that seeding provides the previous set for both kinds.
    ///
    /// Expected: the seeded emoji and sticker sets are returned on replace
    #[tokio::test]
    async fn seeded_sets_are_returned_on_replace() {
        let snapshots = ExpressionSnapshots::new();
        let guild_id = GuildId::new(TEST_GUILD_ID);
        let sticker = create_test_sticker(7, "party", "tada");
        let stickers: StickerSet = [(sticker.id, sticker)].into_iter().collect();

        snapshots.seed(guild_id, emoji_set(&[1, 2]), stickers).await;

        let old_emojis = snapshots.replace_emojis(guild_id, EmojiSet::new()).await;
        let old_stickers = snapshots.replace_stickers(guild_id, StickerSet::new()).await;

        assert_eq!(old_emojis.map(|set| set.len()), Some(2));
        assert!(old_stickers.is_some_and(|set| set.contains_key(&StickerId::new(7))));
    }

    #[tokio::test]
    async fn removed_guild_starts_over() {
        let snapshots = ExpressionSnapshots::new();
        let guild_id = GuildId::new(TEST_GUILD_ID);

        snapshots.seed(guild_id, emoji_set(&[1]), StickerSet::new()).await;
        snapshots.remove(guild_id).await;

        assert!(snapshots.replace_emojis(guild_id, emoji_set(&[1])).await.is_none());
        assert!(snapshots.replace_stickers(guild_id, StickerSet::new()).await.is_none());
    }

    #[tokio::test]
    async fn guilds_are_tracked_separately() {
        let snapshots = ExpressionSnapshots::new();
        let first = GuildId::new(TEST_GUILD_ID);
        let second = GuildId::new(TEST_GUILD_ID + 1);

        snapshots.seed(first, emoji_set(&[1]), StickerSet::new()).await;

        assert!(snapshots.replace_emojis(second, emoji_set(&[2])).await.is_none());
        assert!(snapshots.replace_emojis(first, emoji_set(&[3])).await.is_some());
    }
}
