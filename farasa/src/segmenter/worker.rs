//! Provider of a routine for segmentation.
use crate::partition::PartitionGenerator;
use crate::segmentation::{ScoredSegmentation, Segmentation};
use crate::segmenter::Segmenter;

/// Provider of a routine for segmentation.
///
/// It holds the internal data structures used in segmentation,
/// which can be reused to avoid unnecessary memory reallocation.
pub struct Worker<'a> {
    segmenter: &'a Segmenter,
    word: String,
    generator: PartitionGenerator,
    candidates: Vec<Segmentation>,
    results: Vec<ScoredSegmentation>,
}

impl<'a> Worker<'a> {
    /// Creates a new instance.
    pub(crate) fn new(segmenter: &'a Segmenter) -> Self {
        Self {
            segmenter,
            word: String::new(),
            generator: PartitionGenerator::new(),
            candidates: vec![],
            results: vec![],
        }
    }

    /// Resets the input word to be segmented.
    ///
    /// Surrounding whitespace is ignored.
    pub fn reset_word<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.word.clear();
        self.results.clear();
        self.word.push_str(input.as_ref().trim());
    }

    /// Segments the input word, keeping the `k` highest-scoring results.
    pub fn segment(&mut self, k: usize) {
        self.candidates.clear();
        self.results.clear();
        if self.word.is_empty() {
            return;
        }

        self.segmenter
            .collect_candidates(&self.word, &mut self.generator, &mut self.candidates);
        for seg in self.candidates.drain(..) {
            let score = self.segmenter.score(&seg);
            self.results.push(ScoredSegmentation::new(seg, score));
        }

        // Stable, so ties keep the candidate order.
        self.results.sort_by(ScoredSegmentation::cmp_score);
        let num_dropped = self.results.len().saturating_sub(k);
        self.results.drain(..num_dropped);
    }

    /// Gets the input word without surrounding whitespace.
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Gets the number of results.
    #[inline(always)]
    pub fn num_results(&self) -> usize {
        self.results.len()
    }

    /// Gets the `i`-th result in ascending order of score.
    #[inline(always)]
    pub fn result(&self, i: usize) -> &ScoredSegmentation {
        &self.results[i]
    }

    /// Gets all the results in ascending order of score.
    #[inline(always)]
    pub fn results(&self) -> &[ScoredSegmentation] {
        &self.results
    }

    /// Gets the most likely result.
    #[inline(always)]
    pub fn best(&self) -> Option<&ScoredSegmentation> {
        self.results.last()
    }
}
