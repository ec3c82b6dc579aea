use plateful::likes::{Likes, LIKES_KEY};
use plateful::storage::{FileStore, KeyValueStore, MemoryStore};
use plateful::LikeRecord;

fn record(id: &str) -> LikeRecord {
    LikeRecord {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        publisher: "Test Kitchen".to_string(),
        image_url: format!("https://example.com/{id}.jpg"),
    }
}

#[test]
fn test_add_like_then_is_liked() {
    let mut likes = Likes::new(Box::new(MemoryStore::new()));
    assert!(!likes.is_liked("a"));
    likes.add_like(record("a")).unwrap();
    assert!(likes.is_liked("a"));
    assert_eq!(likes.num_likes(), 1);
}

#[test]
fn test_add_like_twice_keeps_count() {
    let mut likes = Likes::new(Box::new(MemoryStore::new()));
    likes.add_like(record("a")).unwrap();
    likes.add_like(record("a")).unwrap();
    assert_eq!(likes.num_likes(), 1);
}

#[test]
fn test_delete_like_removes_and_unknown_is_noop() {
    let mut likes = Likes::new(Box::new(MemoryStore::new()));
    likes.add_like(record("a")).unwrap();
    likes.add_like(record("b")).unwrap();

    likes.delete_like("a").unwrap();
    assert!(!likes.is_liked("a"));
    assert_eq!(likes.num_likes(), 1);

    likes.delete_like("nope").unwrap();
    assert_eq!(likes.num_likes(), 1);
}

#[test]
fn test_insertion_order_preserved_for_display() {
    let mut likes = Likes::new(Box::new(MemoryStore::new()));
    for id in ["c", "a", "b"] {
        likes.add_like(record(id)).unwrap();
    }
    let order: Vec<&str> = likes.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
}

#[test]
fn test_missing_storage_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut likes = Likes::new(Box::new(FileStore::new(dir.path())));
    likes.read_storage().unwrap();
    assert_eq!(likes.num_likes(), 0);
}

#[test]
fn test_likes_survive_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    // First session: like three recipes, unlike one.
    {
        let mut likes = Likes::new(Box::new(FileStore::new(dir.path())));
        likes.read_storage().unwrap();
        for id in ["a", "b", "c"] {
            likes.add_like(record(id)).unwrap();
        }
        likes.delete_like("b").unwrap();
    }

    // Second session: exactly the final set comes back, in order.
    let mut likes = Likes::new(Box::new(FileStore::new(dir.path())));
    likes.read_storage().unwrap();
    assert_eq!(likes.num_likes(), 2);
    assert!(likes.is_liked("a"));
    assert!(!likes.is_liked("b"));
    assert!(likes.is_liked("c"));
    let order: Vec<&str> = likes.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(order, vec!["a", "c"]);
}

#[test]
fn test_durable_format_uses_author_and_img_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut likes = Likes::new(Box::new(FileStore::new(dir.path())));
    likes.add_like(record("a")).unwrap();
    drop(likes);

    // Inspect what actually landed on disk.
    let store = FileStore::new(dir.path());
    let raw = store.read_key(LIKES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["id"], "a");
    assert_eq!(first["author"], "Test Kitchen");
    assert_eq!(first["img"], "https://example.com/a.jpg");
    assert!(first.get("publisher").is_none());
}
