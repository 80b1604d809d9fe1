//! Tests for the map-backed guild settings store.

use obsidion_cache::InMemoryCache;
use obsidion_core::{GuildId, SettingDefaults, SettingName};
use obsidion_error::{DatabaseErrorKind, ObsidionErrorKind};
use obsidion_interface::GuildSettingStore;
use obsidion_settings::{GuildSettingResolver, InMemoryGuildSettingStore};
use std::sync::Arc;

const TOO_LARGE: GuildId = GuildId::new(i64::MAX as u64 + 1);

fn is_out_of_range(kind: &ObsidionErrorKind) -> bool {
    matches!(
        kind,
        ObsidionErrorKind::Database(e) if matches!(e.kind, DatabaseErrorKind::GuildIdOutOfRange(_))
    )
}

#[tokio::test]
async fn test_upsert_then_fetch() {
    let store = InMemoryGuildSettingStore::new();
    let guild = GuildId::new(i64::MAX as u64);

    store.upsert(guild, SettingName::Locale, Some("fr-FR")).await.unwrap();

    assert_eq!(
        store.fetch(guild, SettingName::Locale).await.unwrap().as_deref(),
        Some("fr-FR")
    );
    assert_eq!(store.fetch(guild, SettingName::Prefix).await.unwrap(), None);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_out_of_range_guild_rejected() {
    let store = InMemoryGuildSettingStore::new();

    let err = store
        .upsert(TOO_LARGE, SettingName::Prefix, Some("!"))
        .await
        .unwrap_err();
    assert!(is_out_of_range(err.kind()));

    let err = store.fetch(TOO_LARGE, SettingName::Prefix).await.unwrap_err();
    assert!(is_out_of_range(err.kind()));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_out_of_range_guild_is_not_cached() {
    let cache = Arc::new(InMemoryCache::default());
    let resolver = GuildSettingResolver::new(
        cache.clone(),
        Arc::new(InMemoryGuildSettingStore::new()),
        SettingDefaults::default(),
    );

    assert!(resolver.set(TOO_LARGE, SettingName::Prefix, Some("!")).await.is_err());
    assert!(resolver.get(Some(TOO_LARGE), SettingName::Prefix).await.is_err());
    assert!(cache.is_empty().await);
}
