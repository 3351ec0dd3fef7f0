//! Memo of segmentations by surface word.
use std::io::Read;
use std::sync::RwLock;

use hashbrown::HashMap;

use crate::errors::Result;

/// Memo from a surface word to its chosen segmentation in the plain form.
///
/// Entries are never evicted, so the memory grows with the vocabulary of the
/// input. The map sits behind a [`RwLock`] so that one instance can be shared
/// by worker threads.
#[derive(Default)]
pub struct SegmentCache {
    map: RwLock<HashMap<String, String>>,
}

impl SegmentCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache filled from a JSON object mapping words to
    /// segmentations.
    ///
    /// # Errors
    ///
    /// [`FarasaError`](crate::errors::FarasaError) is returned when the input
    /// is not such an object.
    pub fn from_json_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let map: std::collections::HashMap<String, String> = serde_json::from_reader(rdr)?;
        Ok(Self {
            map: RwLock::new(map.into_iter().collect()),
        })
    }

    /// Gets the segmentation of `word` if it is cached.
    pub fn get(&self, word: &str) -> Option<String> {
        let map = self.map.read().unwrap_or_else(|e| e.into_inner());
        map.get(word).cloned()
    }

    /// Caches the segmentation of `word`, replacing an existing one.
    pub fn insert(&self, word: String, segmentation: String) {
        let mut map = self.map.write().unwrap_or_else(|e| e.into_inner());
        map.insert(word, segmentation);
    }

    /// Gets the segmentation of `word`, computing and caching it with `f` on a
    /// miss.
    ///
    /// `f` runs without holding the lock, so two threads missing the same word
    /// may both compute it. The first insertion wins.
    pub fn get_or_insert_with<F>(&self, word: &str, f: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(segmentation) = self.get(word) {
            return segmentation;
        }
        let segmentation = f();
        let mut map = self.map.write().unwrap_or_else(|e| e.into_inner());
        map.entry(word.to_string())
            .or_insert(segmentation)
            .clone()
    }

    /// Gets the number of cached words.
    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Checks if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_get() {
        let cache = SegmentCache::new();
        assert!(cache.is_empty());
        assert_eq!(None, cache.get("والكتاب"));

        cache.insert("والكتاب".to_string(), "و+ال+كتاب".to_string());
        assert_eq!(Some("و+ال+كتاب".to_string()), cache.get("والكتاب"));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn test_get_or_insert_with() {
        let cache = SegmentCache::new();
        let mut calls = 0;
        let seg = cache.get_or_insert_with("كتابه", || {
            calls += 1;
            "كتاب+ه".to_string()
        });
        assert_eq!("كتاب+ه", seg);
        let seg = cache.get_or_insert_with("كتابه", || {
            calls += 1;
            "كتابه".to_string()
        });
        assert_eq!("كتاب+ه", seg);
        assert_eq!(1, calls);
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"{"والكتاب": "و+ال+كتاب", "كتابه": "كتاب+ه"}"#;
        let cache = SegmentCache::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(2, cache.len());
        assert_eq!(Some("كتاب+ه".to_string()), cache.get("كتابه"));
    }

    #[test]
    #[should_panic]
    fn test_from_json_reader_invalid() {
        SegmentCache::from_json_reader(r#"["كتابه"]"#.as_bytes()).unwrap();
    }

    #[test]
    fn test_shared() {
        let cache = Arc::new(SegmentCache::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for j in 0..100 {
                        let word = format!("w{}", j);
                        cache.get_or_insert_with(&word, || format!("{}-{}", word, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(100, cache.len());
    }
}
