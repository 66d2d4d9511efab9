// tests/feed_load.rs
//
// Feed files on disk and the FEED_PATH override.

use std::{env, fs};

use content_feed::feed::ENV_FEED_PATH;
use content_feed::{Article, ContentItem, FeedList, Video};

#[test]
fn json_file_round_trips_into_entries() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("feed.json");
    fs::write(
        &p,
        r#"[{"type":"video","url":"u1","views":50},{"type":"article","title":"T","views":175}]"#,
    )
    .unwrap();

    let feed = FeedList::load_from(&p).unwrap();
    let items: Vec<&ContentItem> = feed.items().collect();
    assert_eq!(
        items,
        [
            &ContentItem::from(Video::new("u1", 50)),
            &ContentItem::from(Article::new("T", 175)),
        ]
    );
}

#[test]
fn toml_file_is_picked_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("feed.TOML");
    fs::write(&p, "[[items]]\ntype = \"article\"\nviews = 12\n").unwrap();

    let feed = FeedList::load_from(&p).unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.entries()[0].item, ContentItem::from(Article::untitled(12)));
}

#[test]
fn bad_entries_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("broken.json");
    fs::write(&p, r#"[{"type":"video","views":-3}]"#).unwrap();

    let err = FeedList::load_from(&p).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("broken.json"), "{msg}");
}

#[test]
fn missing_file_is_an_error() {
    let err = FeedList::load_from(std::path::Path::new("/no/such/feed.json")).unwrap_err();
    assert!(format!("{err:#}").contains("reading feed"));
}

#[serial_test::serial]
#[test]
fn env_path_wins_over_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let from_env = dir.path().join("env.json");
    let from_cfg = dir.path().join("cfg.json");
    fs::write(&from_env, r#"[{"type":"article","title":"env","views":1}]"#).unwrap();
    fs::write(&from_cfg, r#"[]"#).unwrap();

    env::set_var(ENV_FEED_PATH, from_env.display().to_string());
    let feed = FeedList::load(Some(from_cfg.as_path())).unwrap();
    assert_eq!(feed.entries()[0].item, ContentItem::from(Article::new("env", 1)));

    env::remove_var(ENV_FEED_PATH);
    let feed = FeedList::load(Some(from_cfg.as_path())).unwrap();
    assert!(feed.is_empty());

    let feed = FeedList::load(None).unwrap();
    assert_eq!(feed, FeedList::sample());
}
