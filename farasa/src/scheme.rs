//! Output schemes and surface normalization.
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::classifier::classify_marked;
use crate::common::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, ALEF_MAQSURA, FIELD_SEPARATOR, HAMZA, HEH,
    MORPHEME_SEPARATOR, TEH_MARBUTA, WAW_HAMZA, YEH, YEH_HAMZA,
};
use crate::errors::{FarasaError, Result};
use crate::segmentation::Segmentation;

const ARTICLE: &str = "\u{0627}\u{0644}";
const LAM_LAM: &str = "\u{0644}\u{0644}";
const LAM_ALEF_LAM: &str = "\u{0644}\u{0627}\u{0644}";
const WAW_LAM_LAM: &str = "\u{0648}\u{0644}\u{0644}";
const WAW_LAM_ALEF_LAM: &str = "\u{0648}\u{0644}\u{0627}\u{0644}";
const TEH_MARBUTA_STR: &str = "\u{0629}";

/// Rendering of a segmentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    /// Morphemes joined with `+`, e.g., `و+ال+كتاب+ه`.
    #[default]
    Plain,

    /// Penn Arabic Treebank style: the article and a ta-marbuta suffix stay on
    /// the stem, and the remaining prefixes and suffixes form one token each,
    /// e.g., `و+ الكتاب +ه`.
    Atb,
}

impl FromStr for Scheme {
    type Err = FarasaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "atb" => Ok(Self::Atb),
            _ => Err(FarasaError::invalid_argument(
                "scheme",
                format!("{} is not a scheme (plain or atb)", s),
            )),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Atb => write!(f, "atb"),
        }
    }
}

impl Scheme {
    /// Renders a segmentation, normalizing the letters when `normalizer` is
    /// given.
    pub fn render(&self, seg: &Segmentation, normalizer: Option<&Normalizer>) -> String {
        match self {
            Self::Plain => normalize(seg.marked(), normalizer),
            Self::Atb => render_atb(seg, normalizer),
        }
    }

    /// Renders a segmentation given in the plain form, as stored in a cache.
    pub fn render_marked(&self, marked: &str, normalizer: Option<&Normalizer>) -> String {
        match self {
            Self::Plain => normalize(marked.to_string(), normalizer),
            Self::Atb => render_atb(&classify_marked(marked), normalizer),
        }
    }
}

#[inline(always)]
fn normalize(s: String, normalizer: Option<&Normalizer>) -> String {
    match normalizer {
        Some(n) => n.normalize_full(&s),
        None => s,
    }
}

fn render_atb(seg: &Segmentation, normalizer: Option<&Normalizer>) -> String {
    let mut prefixes = seg.prefixes();
    let mut stem = seg.stem().to_string();
    let mut suffixes = seg.suffixes();

    if let Some((&ARTICLE, rest)) = prefixes.split_last() {
        stem.insert_str(0, ARTICLE);
        prefixes = rest;
    }
    if let Some((&TEH_MARBUTA_STR, rest)) = suffixes.split_first() {
        stem.push_str(TEH_MARBUTA_STR);
        suffixes = rest;
    }

    // Normalized as one canonical string, markers included.
    let attached = Segmentation::new(prefixes.to_vec(), stem, suffixes.to_vec());
    let canonical = normalize(attached.to_string(), normalizer);
    let mut fields = canonical.split(FIELD_SEPARATOR);
    let prefix = fields.next().unwrap_or_default().replace(MORPHEME_SEPARATOR, "");
    let stem = fields.next().unwrap_or_default();
    let suffix = fields.next().unwrap_or_default().replace(MORPHEME_SEPARATOR, "");

    let mut output = String::new();
    if !prefix.is_empty() {
        output.push_str(&prefix);
        output.push(MORPHEME_SEPARATOR);
        output.push(' ');
    }
    output.push_str(stem);
    if !suffix.is_empty() {
        output.push(' ');
        output.push(MORPHEME_SEPARATOR);
        output.push_str(&suffix);
    }
    output
}

/// Normalizer of Arabic letter variants.
pub struct Normalizer {
    diacritics: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            diacritics: Regex::new("[\u{0640}\u{064B}-\u{0652}\u{0670}]").unwrap(),
        }
    }

    /// Removes diacritics and tatweel.
    pub fn remove_diacritics(&self, input: &str) -> String {
        self.diacritics.replace_all(input, "").into_owned()
    }

    /// Expands a leading contracted article, unifies alef, yeh, and hamza
    /// variants, turns ta-marbuta into heh, and removes diacritics.
    pub fn normalize_full(&self, input: &str) -> String {
        let expanded;
        let mut s = input;
        if let Some(rest) = s.strip_prefix(LAM_LAM) {
            expanded = format!("{}{}", LAM_ALEF_LAM, rest);
            s = &expanded;
        } else if let Some(rest) = s.strip_prefix(WAW_LAM_LAM) {
            expanded = format!("{}{}", WAW_LAM_ALEF_LAM, rest);
            s = &expanded;
        }

        let mapped: String = s
            .chars()
            .map(|c| match c {
                ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW => ALEF,
                ALEF_MAQSURA => YEH,
                WAW_HAMZA | YEH_HAMZA => HAMZA,
                TEH_MARBUTA => HEH,
                _ => c,
            })
            .collect();
        self.remove_diacritics(&mapped)
    }
}
