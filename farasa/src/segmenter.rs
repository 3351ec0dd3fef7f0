//! Segmentation engine.
pub mod worker;

use crate::classifier::classify_marked;
use crate::common::{FIELD_SEPARATOR, MORPHEME_SEPARATOR};
use crate::dictionary::Dictionary;
use crate::partition::PartitionGenerator;
use crate::scorer;
use crate::segmentation::{ScoredSegmentation, Segmentation};
use crate::segmenter::worker::Worker;

/// Segmenter.
///
/// It only reads its dictionary, so one instance can be shared by many
/// threads, each with its own [`Worker`].
pub struct Segmenter {
    dict: Dictionary,
    use_known_tokenizations: bool,
}

impl Segmenter {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `dict`: Dictionary to be used.
    pub const fn new(dict: Dictionary) -> Self {
        Self {
            dict,
            use_known_tokenizations: true,
        }
    }

    /// Specifies whether the precomputed tokenizations of frequent words are
    /// used instead of the partition walk. Enabled by default.
    pub const fn use_known_tokenizations(mut self, yes: bool) -> Self {
        self.use_known_tokenizations = yes;
        self
    }

    /// Gets the reference to the dictionary.
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Creates a new worker.
    pub fn new_worker(&self) -> Worker<'_> {
        Worker::new(self)
    }

    /// Scores a segmentation. A larger score is more likely.
    pub fn score(&self, seg: &Segmentation) -> f64 {
        scorer::score(&self.dict, seg)
    }

    /// Returns the `k` most likely segmentations of `word` in ascending order
    /// of score, so the best one comes last.
    ///
    /// An empty word yields an empty result.
    pub fn most_likely_partitions(&self, word: &str, k: usize) -> Vec<ScoredSegmentation> {
        let mut worker = self.new_worker();
        worker.reset_word(word);
        worker.segment(k);
        worker.results().to_vec()
    }

    /// Collects the candidate segmentations of a trimmed non-empty word.
    pub(crate) fn collect_candidates(
        &self,
        word: &str,
        generator: &mut PartitionGenerator,
        out: &mut Vec<Segmentation>,
    ) {
        if self.use_known_tokenizations {
            let bare = word.replace(MORPHEME_SEPARATOR, "");
            if let Some(known) = self.dict.known_tokenizations(&bare) {
                out.extend(
                    known
                        .iter()
                        .map(|t| classify_marked(&t.replace(FIELD_SEPARATOR, "")))
                        .filter(|seg| !seg.stem().is_empty()),
                );
                if !out.is_empty() {
                    return;
                }
            }
        }
        generator.generate(word, out);
    }
}
