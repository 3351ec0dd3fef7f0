//! Buckwalter transliteration of Arabic letters and diacritics.
//!
//! The template matcher works on the ASCII side of this table, and the root
//! dictionary is keyed by a coarser "morphological" variant of it in which
//! the hamza carriers collapse into `A`.

const ARABIC: [char; 44] = [
    '\u{0627}', '\u{0625}', '\u{0622}', '\u{0623}', '\u{0621}', '\u{0628}', '\u{062A}', '\u{062B}',
    '\u{062C}', '\u{062D}', '\u{062E}', '\u{062F}', '\u{0630}', '\u{0631}', '\u{0632}', '\u{0633}',
    '\u{0634}', '\u{0635}', '\u{0636}', '\u{0637}', '\u{0638}', '\u{0639}', '\u{063A}', '\u{0641}',
    '\u{0642}', '\u{0643}', '\u{0644}', '\u{0645}', '\u{0646}', '\u{0647}', '\u{0648}', '\u{064A}',
    '\u{0649}', '\u{0629}', '\u{0624}', '\u{0626}', '\u{064E}', '\u{064B}', '\u{064F}', '\u{064C}',
    '\u{0650}', '\u{064D}', '\u{0652}', '\u{0651}',
];

const BUCKWALTER: [char; 44] = [
    'A', '<', '|', '>', '\'', 'b', 't', 'v', 'j', 'H', 'x', 'd', '*', 'r', 'z', 's', '$', 'S', 'D',
    'T', 'Z', 'E', 'g', 'f', 'q', 'k', 'l', 'm', 'n', 'h', 'w', 'y', 'Y', 'p', '&', '}', 'a', 'F',
    'u', 'N', 'i', 'K', 'o', '~',
];

#[inline(always)]
fn remap(ch: char, from: &[char], to: &[char]) -> char {
    from.iter()
        .position(|&c| c == ch)
        .map_or(ch, |i| to[i])
}

/// Converts Arabic script into Buckwalter ASCII.
///
/// Characters outside the table are kept as they are.
pub fn to_buckwalter(input: &str) -> String {
    input.chars().map(|c| remap(c, &ARABIC, &BUCKWALTER)).collect()
}

/// Converts Buckwalter ASCII back into Arabic script.
pub fn from_buckwalter(input: &str) -> String {
    input.chars().map(|c| remap(c, &BUCKWALTER, &ARABIC)).collect()
}

/// Converts Buckwalter ASCII into the encoding of the root dictionary.
pub fn to_morph(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '$' => 'P',
            'Y' => 'y',
            '*' => 'O',
            '\'' | '|' | '&' | '}' | '<' | '>' => 'A',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_buckwalter() {
        assert_eq!("ktAb", to_buckwalter("كتاب"));
        assert_eq!("Almdrsp", to_buckwalter("المدرسة"));
        assert_eq!("kataba", to_buckwalter("كَتَبَ"));
    }

    #[test]
    fn test_from_buckwalter() {
        assert_eq!("كتاب", from_buckwalter("ktAb"));
        assert_eq!("مسؤول", from_buckwalter("ms&wl"));
    }

    #[test]
    fn test_passthrough() {
        assert_eq!("abc 123", to_buckwalter("abc 123"));
        assert_eq!("ك1", from_buckwalter("k1"));
    }

    #[test]
    fn test_to_morph() {
        assert_eq!("sAl", to_morph("s>l"));
        assert_eq!("PAy", to_morph("$}Y"));
        assert_eq!("Okr", to_morph("*kr"));
    }
}
