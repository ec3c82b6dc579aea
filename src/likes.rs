//! Favorites store, mirrored to durable storage.

use log::{debug, warn};

use crate::error::PlatefulError;
use crate::model::LikeRecord;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized likes array.
pub const LIKES_KEY: &str = "likes";

/// An insertion-ordered set of liked recipes, keyed by recipe id.
///
/// Every mutation re-serializes the full set to the store before
/// returning, so the durable state is always exactly the result of the
/// last successful call.
pub struct Likes {
    store: Box<dyn KeyValueStore>,
    likes: Vec<LikeRecord>,
}

impl Likes {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            likes: Vec::new(),
        }
    }

    /// Rehydrate the in-memory set from durable storage, preserving stored
    /// order. A store with no likes key yet is simply empty.
    pub fn read_storage(&mut self) -> Result<(), PlatefulError> {
        match self.store.read_key(LIKES_KEY)? {
            Some(raw) => {
                self.likes = serde_json::from_str(&raw)?;
                debug!("restored {} liked recipes", self.likes.len());
            }
            None => {
                debug!("no stored likes found");
                self.likes.clear();
            }
        }
        Ok(())
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    /// Insert (or overwrite, same effect) a like and persist the set.
    pub fn add_like(&mut self, like: LikeRecord) -> Result<&LikeRecord, PlatefulError> {
        let idx = match self.likes.iter().position(|existing| existing.id == like.id) {
            Some(idx) => {
                self.likes[idx] = like;
                idx
            }
            None => {
                self.likes.push(like);
                self.likes.len() - 1
            }
        };
        self.persist()?;
        Ok(&self.likes[idx])
    }

    /// Remove a like and persist the set. Unknown ids are a no-op and do
    /// not touch storage.
    pub fn delete_like(&mut self, id: &str) -> Result<(), PlatefulError> {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() == before {
            warn!("delete_like for unknown recipe {id}");
            return Ok(());
        }
        self.persist()
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LikeRecord> {
        self.likes.iter()
    }

    fn persist(&mut self) -> Result<(), PlatefulError> {
        let raw = serde_json::to_string(&self.likes)?;
        self.store.write_key(LIKES_KEY, &raw)
    }
}
