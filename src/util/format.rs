use serenity::all::Timestamp;

/// Maximum length of an embed description accepted by Discord.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Placeholder for values the cache could not provide.
pub const UNKNOWN: &str = "Unknown";

/// Formats a timestamp as a Discord relative time tag (`<t:unix:R>`).
pub fn relative_time(timestamp: Timestamp) -> String {
    format!("<t:{}:R>", timestamp.unix_timestamp())
}

/// Returns the value or `"None"`, treating empty strings as absent.
pub fn or_none(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "None",
    }
}

/// Shortens a description to fit in an embed, marking the cut with an ellipsis.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= EMBED_DESCRIPTION_LIMIT {
        return description.to_string();
    }

    let mut truncated: String = description
        .chars()
        .take(EMBED_DESCRIPTION_LIMIT - 1)
        .collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that descriptions within the limit are left untouched.
    ///
    /// Expected: identical string
    #[test]
    fn short_description_is_unchanged() {
        let text = "a".repeat(EMBED_DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&text), text);
    }

    /// Tests that long descriptions are cut to exactly the limit, counted in characters.
    ///
    /// Expected: limit characters ending with an ellipsis
    #[test]
    fn long_description_is_truncated() {
        let text = "é".repeat(EMBED_DESCRIPTION_LIMIT + 10);
        let truncated = truncate_description(&text);

        assert_eq!(truncated.chars().count(), EMBED_DESCRIPTION_LIMIT);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn or_none_treats_empty_as_missing() {
        assert_eq!(or_none(None), "None");
        assert_eq!(or_none(Some("")), "None");
        assert_eq!(or_none(Some("general")), "general");
    }

    #[test]
    fn relative_time_uses_unix_seconds() {
        let timestamp = Timestamp::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(relative_time(timestamp), "<t:1700000000:R>");
    }
}
