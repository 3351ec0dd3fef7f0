//! Log-linear scoring of segmentations.
//!
//! A score is the dot product of [`WEIGHTS`] and the feature vector of a
//! segmentation. Every table lookup that misses falls back to a fixed
//! penalty, so scoring never fails.
use crate::common::{ALEF_MAQSURA, TEH, TEH_MARBUTA, YEH};
use crate::dictionary::table::{MemberSet, ValueTable};
use crate::dictionary::Dictionary;
use crate::segmentation::Segmentation;

/// The number of features.
pub const NUM_FEATURES: usize = 18;

/// Trained feature weights.
pub const WEIGHTS: [f64; NUM_FEATURES] = [
    -0.097825818,
    -0.03893654,
    0.13109569,
    0.18436976,
    0.11448806,
    0.53001714,
    0.21098258,
    -0.17760228,
    0.44223878,
    0.26183113,
    -0.05603376,
    0.055829503,
    -0.17745291,
    0.015865559,
    0.66909122,
    0.16948195,
    0.15397599,
    0.60355717,
];

/// Log-space value of an unseen affix or word.
pub const UNSEEN_PENALTY: f64 = -10.0;

/// Log-space value of an unseen affix combination or conditional affix.
pub const UNSEEN_PAIR_PENALTY: f64 = -20.0;

/// Key of the template-count table used when no template fits.
pub const NO_TEMPLATE: &str = "Y";

/// Feature indices.
mod feat {
    pub const PREFIX: usize = 0;
    pub const SUFFIX: usize = 1;
    pub const STEM_COUNT: usize = 2;
    pub const PREFIX_SUFFIX: usize = 3;
    pub const SUFFIX_PREFIX: usize = 4;
    pub const HAS_TEMPLATE: usize = 5;
    pub const MORPH_LIST: usize = 6;
    pub const GAZETTEER: usize = 7;
    pub const COND_PREFIX: usize = 8;
    pub const COND_SUFFIX: usize = 9;
    pub const STEM_FIRST_SUFFIX_COUNT: usize = 10;
    pub const TEMPLATE_COUNT: usize = 11;
    pub const STEM_LENGTH: usize = 12;
    pub const ARA_LEX_COM: usize = 13;
    pub const BUCKWALTER: usize = 14;
    pub const LOCATION: usize = 15;
    pub const PERSON: usize = 16;
    pub const STOP_WORD: usize = 17;
}

#[inline(always)]
fn log_or(value: Option<f64>, penalty: f64) -> f64 {
    value.map_or(penalty, f64::ln)
}

#[inline(always)]
fn bernoulli(hit: bool, p: f64) -> f64 {
    if hit {
        p.ln()
    } else {
        (1.0 - p).ln()
    }
}

#[inline(always)]
fn indicator(hit: bool) -> f64 {
    if hit {
        1.0
    } else {
        -1.0
    }
}

/// Replaces the final yeh with alef-maqsura, the usual alternative spelling.
fn maqsura_variant(stem: &str) -> Option<String> {
    stem.strip_suffix(YEH).map(|s| format!("{}{}", s, ALEF_MAQSURA))
}

/// Checks `set` with the stem and then with its alef-maqsura spelling.
fn contains_with_maqsura(set: &MemberSet, stem: &str) -> bool {
    set.contains(stem) || maqsura_variant(stem).map_or(false, |v| set.contains(&v))
}

/// Restores a ta-marbuta that turned into teh before a suffix.
///
/// Returns the stem with ta-marbuta when the suffix morphemes read together
/// start with teh and are longer than one letter.
fn teh_marbuta_variant(seg: &Segmentation) -> Option<String> {
    let joined = seg.suffixes().concat();
    if joined.starts_with(TEH) && joined.chars().count() > 1 {
        Some(format!("{}{}", seg.stem(), TEH_MARBUTA))
    } else {
        None
    }
}

fn stem_count(counts: &ValueTable, seg: &Segmentation, alt_stem: Option<&str>) -> f64 {
    counts
        .get(seg.stem())
        .or_else(|| alt_stem.and_then(|s| counts.get(s)))
        .unwrap_or(UNSEEN_PENALTY)
}

fn stem_first_suffix_count(counts: &ValueTable, seg: &Segmentation, suffix_field: &str) -> f64 {
    let stem = seg.stem();
    let key = match seg.suffixes() {
        [first, _, ..] => format!("{}{}", stem, first),
        _ => format!("{}{}", stem, suffix_field),
    };
    counts
        .get(&key)
        .or_else(|| maqsura_variant(stem).and_then(|v| counts.get(&v)))
        .or_else(|| {
            key.strip_suffix(TEH)
                .and_then(|k| counts.get(&format!("{}{}", k, TEH_MARBUTA)))
        })
        .unwrap_or(UNSEEN_PENALTY)
}

fn ara_lex_com(dict: &Dictionary, seg: &Segmentation, alt_stem: Option<&str>) -> f64 {
    let stem = seg.stem();
    let maqsura = maqsura_variant(stem);
    let found = [Some(stem), maqsura.as_deref(), alt_stem]
        .into_iter()
        .flatten()
        .find(|key| dict.ara_lex_com().contains(key));
    match found {
        Some(key) => dict.word_count().get(key).unwrap_or(UNSEEN_PENALTY),
        None => UNSEEN_PAIR_PENALTY,
    }
}

/// Computes the feature vector of a segmentation.
pub fn features(dict: &Dictionary, seg: &Segmentation) -> [f64; NUM_FEATURES] {
    let prefix = seg.prefix_field();
    let suffix = seg.suffix_field();
    let stem = seg.stem();
    let alt_stem = teh_marbuta_variant(seg);
    let general = dict.general();
    let fit = dict.templates().fit(stem);

    let mut f = [0.0; NUM_FEATURES];
    f[feat::PREFIX] = log_or(dict.prob_prefixes().get(&prefix), UNSEEN_PENALTY);
    f[feat::SUFFIX] = log_or(dict.prob_suffixes().get(&suffix), UNSEEN_PENALTY);
    f[feat::STEM_COUNT] = stem_count(dict.word_count(), seg, alt_stem.as_deref());
    f[feat::PREFIX_SUFFIX] = log_or(
        dict.prob_prefix_suffix().get(&prefix, &suffix),
        UNSEEN_PAIR_PENALTY,
    );
    f[feat::SUFFIX_PREFIX] = log_or(
        dict.prob_suffix_prefix().get(&suffix, &prefix),
        UNSEEN_PAIR_PENALTY,
    );
    f[feat::HAS_TEMPLATE] = bernoulli(fit.is_some(), general.has_template);
    f[feat::MORPH_LIST] = bernoulli(
        contains_with_maqsura(dict.morph_list(), stem),
        general.in_morph_list,
    );
    f[feat::GAZETTEER] = bernoulli(
        contains_with_maqsura(dict.gazetteer(), stem),
        general.in_gaz_list,
    );
    f[feat::COND_PREFIX] = log_or(dict.prob_cond_prefixes().get(&prefix), UNSEEN_PAIR_PENALTY);
    f[feat::COND_SUFFIX] = log_or(dict.prob_cond_suffixes().get(&suffix), UNSEEN_PAIR_PENALTY);
    f[feat::STEM_FIRST_SUFFIX_COUNT] = stem_first_suffix_count(dict.word_count(), seg, &suffix);
    f[feat::TEMPLATE_COUNT] = log_or(
        dict.template_count()
            .get(fit.map_or(NO_TEMPLATE, |fit| fit.template())),
        UNSEEN_PENALTY,
    );
    // An exact average makes this infinite, which the weights were fit with.
    f[feat::STEM_LENGTH] = (stem.chars().count() as f64 - general.average_stem_length)
        .abs()
        .ln();
    f[feat::ARA_LEX_COM] = ara_lex_com(dict, seg, alt_stem.as_deref());
    f[feat::BUCKWALTER] = indicator(contains_with_maqsura(dict.buckwalter_list(), stem));
    f[feat::LOCATION] = indicator(dict.locations().contains(stem));
    f[feat::PERSON] = indicator(dict.people().contains(stem));
    f[feat::STOP_WORD] = indicator(contains_with_maqsura(dict.stop_words(), stem));
    f
}

/// Scores a segmentation. A larger score is more likely.
pub fn score(dict: &Dictionary, seg: &Segmentation) -> f64 {
    WEIGHTS
        .iter()
        .zip(features(dict, seg))
        .fold(0.0, |acc, (w, f)| acc + w * f)
}
