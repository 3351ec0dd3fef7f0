//! Prefix/stem/suffix triples.
use std::cmp::Ordering;
use std::fmt;

use crate::common::{FIELD_SEPARATOR, MORPHEME_SEPARATOR};

/// A word split into prefix morphemes, a stem, and suffix morphemes.
///
/// Prefix and suffix morphemes always come from the compiled-in affix
/// lexicons, so they are kept as static strings. The canonical text form is
/// `<p1>+<p2>+;<stem>;+<s1>+<s2>`, where an empty prefix or suffix renders
/// as an empty field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segmentation {
    prefixes: Vec<&'static str>,
    stem: String,
    suffixes: Vec<&'static str>,
}

impl Segmentation {
    pub(crate) const fn new(
        prefixes: Vec<&'static str>,
        stem: String,
        suffixes: Vec<&'static str>,
    ) -> Self {
        Self {
            prefixes,
            stem,
            suffixes,
        }
    }

    /// Gets the prefix morphemes from left to right.
    #[inline(always)]
    pub fn prefixes(&self) -> &[&'static str] {
        &self.prefixes
    }

    /// Gets the stem.
    #[inline(always)]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Gets the suffix morphemes from left to right.
    #[inline(always)]
    pub fn suffixes(&self) -> &[&'static str] {
        &self.suffixes
    }

    /// Gets the prefix field of the canonical form, e.g., `و+ال+`.
    pub fn prefix_field(&self) -> String {
        let mut field = String::new();
        for p in &self.prefixes {
            field.push_str(p);
            field.push(MORPHEME_SEPARATOR);
        }
        field
    }

    /// Gets the suffix field of the canonical form, e.g., `+ه+ا`.
    pub fn suffix_field(&self) -> String {
        let mut field = String::new();
        for s in &self.suffixes {
            field.push(MORPHEME_SEPARATOR);
            field.push_str(s);
        }
        field
    }

    /// Lists all the morphemes from left to right.
    pub(crate) fn pieces(&self) -> Vec<&str> {
        let mut pieces = Vec::with_capacity(self.prefixes.len() + self.suffixes.len() + 1);
        pieces.extend_from_slice(&self.prefixes);
        pieces.push(&self.stem);
        pieces.extend_from_slice(&self.suffixes);
        pieces
    }

    /// Concatenates all the morphemes without markers.
    pub fn surface(&self) -> String {
        let mut surface = self.prefixes.concat();
        surface.push_str(&self.stem);
        surface.push_str(&self.suffixes.concat());
        surface
    }

    /// Joins all the morphemes with `+`, e.g., `و+ال+كتاب+ه`.
    ///
    /// Classifying this form again yields the same segmentation.
    pub fn marked(&self) -> String {
        let mut marked = self.prefix_field();
        marked.push_str(&self.stem);
        marked.push_str(&self.suffix_field());
        marked
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.prefix_field(),
            self.stem,
            self.suffix_field()
        )
    }
}

/// A segmentation with its model score. A larger score is more likely.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredSegmentation {
    pub(crate) segmentation: Segmentation,
    pub(crate) score: f64,
}

impl ScoredSegmentation {
    pub(crate) const fn new(segmentation: Segmentation, score: f64) -> Self {
        Self {
            segmentation,
            score,
        }
    }

    /// Gets the segmentation.
    #[inline(always)]
    pub const fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }

    /// Gets the score.
    #[inline(always)]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Ascending order by score.
    #[inline(always)]
    pub(crate) fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}
