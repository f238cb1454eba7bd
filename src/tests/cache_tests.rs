use crate::cache::TtlCache;
use std::time::Duration;

#[tokio::test]
async fn test_set_then_get_returns_value() {
    let cache = TtlCache::new();
    cache
        .set("money", &42_i64, Duration::from_secs(20))
        .await
        .unwrap();

    assert_eq!(cache.get::<i64>("money").await.unwrap(), Some(42));
    assert!(cache.has("money").await);
}

#[tokio::test]
async fn test_never_set_key_is_absent() {
    let cache = TtlCache::new();
    assert_eq!(cache.get::<i64>("money").await.unwrap(), None);
    assert!(!cache.has("money").await);
}

#[tokio::test(start_paused = true)]
async fn test_expired_entry_is_absent_and_removed() {
    let cache = TtlCache::new();
    cache
        .set("money", &42_i64, Duration::from_millis(100))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(cache.get::<i64>("money").await.unwrap(), None);
    assert!(!cache.has("money").await);
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_replaces_value_and_ttl() {
    let cache = TtlCache::new();
    cache
        .set("key", &"first".to_string(), Duration::from_secs(3600))
        .await
        .unwrap();
    cache
        .set("key", &"second".to_string(), Duration::from_secs(1))
        .await
        .unwrap();

    // the new value wins immediately
    assert_eq!(
        cache.get::<String>("key").await.unwrap(),
        Some("second".to_string())
    );

    // and so does the new, shorter TTL
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(cache.get::<String>("key").await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_and_clear() {
    let cache = TtlCache::new();
    cache
        .set("a", &1_i64, Duration::from_secs(60))
        .await
        .unwrap();
    cache
        .set("b", &2_i64, Duration::from_secs(60))
        .await
        .unwrap();

    cache.delete("a").await;
    assert_eq!(cache.get::<i64>("a").await.unwrap(), None);
    assert_eq!(cache.get::<i64>("b").await.unwrap(), Some(2));

    cache.clear().await;
    assert_eq!(cache.get::<i64>("b").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire_independently() {
    let cache = TtlCache::new();
    cache
        .set("short", &1_i64, Duration::from_secs(1))
        .await
        .unwrap();
    cache
        .set("long", &2_i64, Duration::from_secs(3600))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(5)).await;

    assert_eq!(cache.get::<i64>("short").await.unwrap(), None);
    assert_eq!(cache.get::<i64>("long").await.unwrap(), Some(2));
}
