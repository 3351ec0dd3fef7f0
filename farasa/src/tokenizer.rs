//! Splitting of raw text into words.
//!
//! Punctuation and other symbols become tokens of their own, a run of ASCII
//! digits is separated from adjacent Arabic letters, and hashtags, mentions,
//! links, and e-mail addresses are kept as they are.
use regex::Regex;

use crate::scheme::Normalizer;

const LAM_LAM: &str = "\u{0644}\u{0644}";
const LAM_ALEF_LAM: &str = "\u{0644}\u{0627}\u{0644}";

const VERBATIM_OPENINGS: [char; 4] = ['#', '@', ':', ';'];

/// Tokenizer of raw text.
pub struct Tokenizer {
    non_characters: Regex,
    controls: Regex,
    email: Regex,
    non_letters: Regex,
    digit_letter: Regex,
    letter_digit: Regex,
    normalizer: Normalizer,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            non_characters: Regex::new(
                "[\u{0020}\u{2000}-\u{200F}\u{2028}-\u{202F}\u{205F}-\u{206F}\u{FEFF}]+",
            )
            .unwrap(),
            controls: Regex::new("[\t\n\r]").unwrap(),
            email: Regex::new(r"[a-zA-Z0-9\-._]+@[a-zA-Z0-9\-._]+").unwrap(),
            non_letters: Regex::new(concat!(
                "[^\u{0621}-\u{063A}\u{0641}-\u{064A}\u{0660}-\u{0669}",
                "\u{0640}\u{064B}-\u{0652}\u{0670}a-zA-Z0-9",
                "\u{00C0}-\u{00C9}\u{00CB}-\u{00D6}\u{00D8}-\u{00F5}\u{00F8}-\u{00FF}]",
            ))
            .unwrap(),
            digit_letter: Regex::new("([0-9])([\u{0621}-\u{063A}\u{0641}-\u{064A}])").unwrap(),
            letter_digit: Regex::new("([\u{0621}-\u{063A}\u{0641}-\u{064A}])([0-9])").unwrap(),
            normalizer: Normalizer::new(),
        }
    }

    /// Splits a line into tokens after removing diacritics.
    ///
    /// A token opening with the contracted article لل is rewritten to لال.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let s = self.non_characters.replace_all(line, " ");
        let s = self.normalizer.remove_diacritics(&s);
        let s = self.controls.replace_all(&s, " ");

        let mut tokens = vec![];
        for word in s.split_whitespace() {
            if self.is_verbatim(word) {
                tokens.push(word.to_string());
                continue;
            }
            let padded = self.non_letters.replace_all(word, " $0 ");
            let padded = self.digit_letter.replace_all(&padded, "$1 $2");
            let padded = self.letter_digit.replace_all(&padded, "$1 $2");
            for token in padded.split_whitespace() {
                match token.strip_prefix(LAM_LAM) {
                    Some(rest) => tokens.push(format!("{}{}", LAM_ALEF_LAM, rest)),
                    None => tokens.push(token.to_string()),
                }
            }
        }
        tokens
    }

    fn is_verbatim(&self, word: &str) -> bool {
        word.starts_with(&VERBATIM_OPENINGS[..])
            || word.starts_with("http://")
            || self.email.is_match(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation() {
        let t = Tokenizer::new();
        assert_eq!(
            vec!["الكتاب", "،", "جديد", "."],
            t.tokenize("الكتاب، جديد.")
        );
        assert_eq!(vec!["(", "قلم", ")", "!"], t.tokenize("(قلم)!"));
    }

    #[test]
    fn test_decimal_point_splits() {
        let t = Tokenizer::new();
        assert_eq!(vec!["3", ".", "5"], t.tokenize("3.5"));
    }

    #[test]
    fn test_digits_and_letters() {
        let t = Tokenizer::new();
        assert_eq!(vec!["عام", "2024", "م"], t.tokenize("عام 2024م"));
        assert_eq!(vec!["ب", "1", "ب", "2"], t.tokenize("ب1ب2"));
        // Latin letters and Hindi digits stay attached.
        assert_eq!(vec!["A4"], t.tokenize("A4"));
        assert_eq!(vec!["٢٠٢٤م"], t.tokenize("٢٠٢٤م"));
    }

    #[test]
    fn test_verbatim_words() {
        let t = Tokenizer::new();
        assert_eq!(
            vec![
                "#وسم_جديد",
                "@مستخدم",
                "http://example.com/a,b",
                "user.name@example.com",
                ":)"
            ],
            t.tokenize("#وسم_جديد @مستخدم http://example.com/a,b user.name@example.com :)")
        );
        // https is not kept.
        assert_eq!(vec!["https", ":", "/", "/", "a"], t.tokenize("https://a"));
    }

    #[test]
    fn test_contracted_article() {
        let t = Tokenizer::new();
        assert_eq!(vec!["لالكتاب"], t.tokenize("للكتاب"));
        assert_eq!(vec!["وللكتاب"], t.tokenize("وللكتاب"));
        assert_eq!(vec!["(", "لالمدرسة"], t.tokenize("(للمدرسة"));
    }

    #[test]
    fn test_spaces_and_diacritics() {
        let t = Tokenizer::new();
        assert_eq!(
            vec!["كتاب", "قلم", "بيت", "باب"],
            t.tokenize("كِتَابٌ\u{200B}قلم\tبيت\u{FEFF}\u{00A0}باب\r\n")
        );
        assert!(t.tokenize(" \t\u{2009}").is_empty());
    }

    #[test]
    fn test_latin1_letters() {
        let t = Tokenizer::new();
        assert_eq!(vec!["café"], t.tokenize("café"));
        assert_eq!(vec!["a", "×", "b"], t.tokenize("a×b"));
    }
}
