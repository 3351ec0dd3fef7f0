//! Enumeration of candidate segmentations over the boundary lattice of a word.
//!
//! A partition of a word of `n` characters is a bitmask over its `n - 1`
//! gaps, where a set bit places a boundary after the corresponding
//! character. The walk starts from the finest partition and repeatedly
//! removes one boundary. Because the classifier only cares about affix
//! boundaries, most partitions collapse onto a few canonical segmentations,
//! and a partition is expanded only when its segmentation is new.
use std::iter;

use hashbrown::HashSet;
use log::debug;

use crate::classifier::classify;
use crate::common::{ALEF, FEH, LAM, WAW};
use crate::segmentation::Segmentation;

/// The maximum number of gaps representable in a partition mask.
pub const MAX_GAPS: usize = u64::BITS as usize;

#[derive(Clone, Copy)]
struct Frame {
    mask: u64,
    // Boundaries of `mask` that have not been removed yet.
    pending: u64,
}

/// Generator of candidate segmentations.
///
/// It holds the work stack and the dedup set so that they can be reused
/// across words.
#[derive(Default)]
pub struct PartitionGenerator {
    stack: Vec<Frame>,
    seen: HashSet<Segmentation>,
}

impl PartitionGenerator {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the deduplicated canonical segmentations of `word`,
    /// appending them to `out` in discovery order.
    ///
    /// When the word opens with the contracted article لل (optionally after
    /// و or ف), the segmentations of the expanded form لال are added as well.
    pub fn generate(&mut self, word: &str, out: &mut Vec<Segmentation>) {
        self.seen.clear();
        self.walk(word, out);
        if let Some(expanded) = expand_lam_lam(word) {
            self.walk(&expanded, out);
        }
    }

    fn walk(&mut self, word: &str, out: &mut Vec<Segmentation>) {
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(word.len()))
            .collect();
        let len_char = bounds.len() - 1;
        if len_char == 0 {
            return;
        }
        let num_gaps = len_char - 1;
        if num_gaps > MAX_GAPS {
            debug!("{} characters exceed the partition mask: {}", len_char, word);
            insert(&mut self.seen, out, classify(&[word]));
            return;
        }

        let full = if num_gaps == MAX_GAPS {
            u64::MAX
        } else {
            (1 << num_gaps) - 1
        };

        // A one-letter stem is only acceptable for a one-letter word.
        let finest = classify_mask(word, &bounds, full);
        if len_char == 1 || finest.stem().chars().count() != 1 {
            insert(&mut self.seen, out, finest);
        }

        self.stack.clear();
        if full != 0 {
            self.stack.push(Frame {
                mask: full,
                pending: full,
            });
        }
        while let Some(frame) = self.stack.last_mut() {
            if frame.pending == 0 {
                self.stack.pop();
                continue;
            }
            let gap = frame.pending.trailing_zeros();
            frame.pending &= frame.pending - 1;
            let child = frame.mask & !(1 << gap);

            let seg = classify_mask(word, &bounds, child);
            if insert(&mut self.seen, out, seg) && child != 0 {
                self.stack.push(Frame {
                    mask: child,
                    pending: child,
                });
            }
        }
    }
}

/// Generates the candidate segmentations of `word`.
pub fn partitions(word: &str) -> Vec<Segmentation> {
    let mut out = vec![];
    PartitionGenerator::new().generate(word, &mut out);
    out
}

fn insert(seen: &mut HashSet<Segmentation>, out: &mut Vec<Segmentation>, seg: Segmentation) -> bool {
    if seen.contains(&seg) {
        return false;
    }
    seen.insert(seg.clone());
    out.push(seg);
    true
}

fn classify_mask(word: &str, bounds: &[usize], mask: u64) -> Segmentation {
    let mut pieces = Vec::with_capacity(mask.count_ones() as usize + 1);
    let mut start = 0;
    let mut rest = mask;
    while rest != 0 {
        let gap = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        let end = bounds[gap + 1];
        pieces.push(&word[start..end]);
        start = end;
    }
    pieces.push(&word[start..]);
    classify(&pieces)
}

/// Expands the contracted article لل at the beginning of a word to لال,
/// also after the conjunctions و and ف.
pub fn expand_lam_lam(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let head = match chars.next()? {
        LAM => None,
        c @ (WAW | FEH) => Some(c),
        _ => return None,
    };
    if head.is_some() && chars.next()? != LAM {
        return None;
    }
    if chars.next()? != LAM {
        return None;
    }

    let mut expanded = String::with_capacity(word.len() + ALEF.len_utf8());
    expanded.extend(head);
    expanded.push(LAM);
    expanded.push(ALEF);
    expanded.push(LAM);
    expanded.push_str(chars.as_str());
    Some(expanded)
}
