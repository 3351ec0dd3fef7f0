//! Common settings in Farasa.
use bincode::config::{self, Fixint, LittleEndian};

/// Closed lexicon of prefix morphemes.
pub const PREFIXES: [&str; 8] = [
    "\u{0627}\u{0644}", // ال
    "\u{0648}",         // و
    "\u{0641}",         // ف
    "\u{0628}",         // ب
    "\u{0643}",         // ك
    "\u{0644}",         // ل
    "\u{0644}\u{0644}", // لل
    "\u{0633}",         // س
];

/// Closed lexicon of suffix morphemes.
pub const SUFFIXES: [&str; 20] = [
    "\u{0647}",                 // ه
    "\u{0647}\u{0627}",         // ها
    "\u{0643}",                 // ك
    "\u{064A}",                 // ي
    "\u{0647}\u{0645}\u{0627}", // هما
    "\u{0643}\u{0645}\u{0627}", // كما
    "\u{0646}\u{0627}",         // نا
    "\u{0643}\u{0645}",         // كم
    "\u{0647}\u{0645}",         // هم
    "\u{0647}\u{0646}",         // هن
    "\u{0643}\u{0646}",         // كن
    "\u{0627}",                 // ا
    "\u{0627}\u{0646}",         // ان
    "\u{064A}\u{0646}",         // ين
    "\u{0648}\u{0646}",         // ون
    "\u{0648}\u{0627}",         // وا
    "\u{0627}\u{062A}",         // ات
    "\u{062A}",                 // ت
    "\u{0646}",                 // ن
    "\u{0629}",                 // ة
];

/// Piece accepted in suffix position although it is not a suffix morpheme.
pub const PLACEHOLDER: &str = "_";

/// Separator between morphemes inside the prefix or the suffix field.
pub const MORPHEME_SEPARATOR: char = '+';

/// Separator between the prefix, stem, and suffix fields.
pub const FIELD_SEPARATOR: char = ';';

/// The future-tense prefix that is only split off before these openings.
pub const SIN_PREFIX: &str = "\u{0633}";

/// Stem openings that license splitting off [`SIN_PREFIX`].
pub const SIN_OPENINGS: [char; 4] = ['\u{064A}', '\u{0646}', '\u{0623}', '\u{062A}'];

pub(crate) const ALEF: char = '\u{0627}';
pub(crate) const ALEF_MADDA: char = '\u{0622}';
pub(crate) const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub(crate) const ALEF_HAMZA_BELOW: char = '\u{0625}';
pub(crate) const HAMZA: char = '\u{0621}';
pub(crate) const WAW_HAMZA: char = '\u{0624}';
pub(crate) const YEH_HAMZA: char = '\u{0626}';
pub(crate) const YEH: char = '\u{064A}';
pub(crate) const ALEF_MAQSURA: char = '\u{0649}';
pub(crate) const TEH_MARBUTA: char = '\u{0629}';
pub(crate) const TEH: char = '\u{062A}';
pub(crate) const HEH: char = '\u{0647}';
pub(crate) const WAW: char = '\u{0648}';
pub(crate) const FEH: char = '\u{0641}';
pub(crate) const LAM: char = '\u{0644}';
pub(crate) const TAH: char = '\u{0637}';
pub(crate) const DAL: char = '\u{062F}';

#[inline(always)]
pub(crate) fn lookup_prefix(piece: &str) -> Option<&'static str> {
    PREFIXES.iter().copied().find(|&p| p == piece)
}

#[inline(always)]
pub(crate) fn lookup_suffix(piece: &str) -> Option<&'static str> {
    if piece == PLACEHOLDER {
        return Some(PLACEHOLDER);
    }
    SUFFIXES.iter().copied().find(|&s| s == piece)
}

/// Gets the bincode configuration of compiled models.
pub fn bincode_config() -> config::Configuration<LittleEndian, Fixint> {
    config::standard()
        .with_little_endian()
        .with_fixed_int_encoding()
}
