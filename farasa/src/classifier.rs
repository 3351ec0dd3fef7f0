//! Affix boundary classification.
//!
//! A candidate is a sequence of pieces, one hypothesis of where morpheme
//! boundaries fall. The classifier reads it against the closed affix
//! lexicons: leading pieces that are prefixes form the prefix, trailing
//! pieces that are suffixes form the suffix, and whatever lies between is
//! glued into the stem.
use crate::common::{
    lookup_prefix, lookup_suffix, MORPHEME_SEPARATOR, SIN_OPENINGS, SIN_PREFIX,
};
use crate::segmentation::Segmentation;

/// Classifies a sequence of pieces into a canonical [`Segmentation`].
///
/// Empty pieces are ignored. For a non-empty input the stem is never empty:
/// when every piece is a prefix the last one stays in the stem, and the
/// suffix scan never reaches the first piece after the prefixes.
///
/// Gluing can turn stem pieces into an affix, so the morphemes are
/// classified again until nothing changes. The result is therefore stable
/// under [`classify_marked`] of its [`marked`](Segmentation::marked) form.
pub fn classify<S>(pieces: &[S]) -> Segmentation
where
    S: AsRef<str>,
{
    let pieces: Vec<&str> = pieces.iter().map(AsRef::as_ref).collect();
    let mut seg = classify_once(&pieces);
    // Terminates since the number of morphemes never grows, and an equal
    // number means the same morphemes.
    loop {
        let next = classify_once(&seg.pieces());
        if next == seg {
            return seg;
        }
        seg = next;
    }
}

fn classify_once(pieces: &[&str]) -> Segmentation {
    let pieces: Vec<&str> = pieces.iter().copied().filter(|p| !p.is_empty()).collect();
    if pieces.is_empty() {
        return Segmentation::default();
    }

    let mut prefixes = vec![];
    for piece in &pieces {
        match lookup_prefix(piece) {
            Some(p) => prefixes.push(p),
            None => break,
        }
    }
    if prefixes.len() == pieces.len() {
        prefixes.pop();
    }

    let begin = prefixes.len();
    let mut end = pieces.len();
    while end > begin + 1 && lookup_suffix(pieces[end - 1]).is_some() {
        end -= 1;
    }
    let suffixes = pieces[end..]
        .iter()
        .filter_map(|piece| lookup_suffix(piece))
        .collect();

    let mut stem = pieces[begin..end].concat();

    // The sin prefix marks the future tense, which only opens with these letters.
    if prefixes.last() == Some(&SIN_PREFIX) && !stem.starts_with(&SIN_OPENINGS[..]) {
        prefixes.pop();
        stem.insert_str(0, SIN_PREFIX);
    }

    Segmentation::new(prefixes, stem, suffixes)
}

/// Classifies a candidate whose pieces are joined with `+`.
///
/// Repeated, leading, and trailing markers are ignored.
pub fn classify_marked(input: &str) -> Segmentation {
    let pieces: Vec<&str> = input.split(MORPHEME_SEPARATOR).collect();
    classify(&pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_stem_suffix() {
        let seg = classify_marked("و+ال+كتاب+ه");
        assert_eq!(&["و", "ال"], seg.prefixes());
        assert_eq!("كتاب", seg.stem());
        assert_eq!(&["ه"], seg.suffixes());
        assert_eq!("و+ال+;كتاب;+ه", seg.to_string());
    }

    #[test]
    fn test_stem_pieces_are_glued() {
        let seg = classify(&["ال", "ك", "ت", "ا", "ب"]);
        assert_eq!("ال+ك+;تاب;", seg.to_string());

        let seg = classify(&["ال", "كت", "ا", "ب"]);
        assert_eq!("ال+;كتاب;", seg.to_string());
    }

    #[test]
    fn test_prefix_scan_stops_at_first_miss() {
        // ه is not a prefix, so ال stays in the stem.
        let seg = classify(&["و", "ه", "ال"]);
        assert_eq!(&["و"], seg.prefixes());
        assert_eq!("هال", seg.stem());
    }

    #[test]
    fn test_multiple_suffixes() {
        let seg = classify_marked("كتب+ون+ها");
        assert_eq!(";كتب;+ون+ها", seg.to_string());
    }

    #[test]
    fn test_placeholder_suffix() {
        let seg = classify_marked("كتب+_");
        assert_eq!(";كتب;+_", seg.to_string());
    }

    #[test]
    fn test_all_prefixes() {
        let seg = classify(&["و", "ال"]);
        assert_eq!("و+;ال;", seg.to_string());

        let seg = classify(&["و"]);
        assert_eq!(";و;", seg.to_string());
    }

    #[test]
    fn test_scans_do_not_cross() {
        // ك is both a prefix and a suffix.
        let seg = classify(&["ك", "ه"]);
        assert_eq!("ك+;ه;", seg.to_string());

        let seg = classify(&["ه", "ه"]);
        assert_eq!(";ه;+ه", seg.to_string());
    }

    #[test]
    fn test_sin_prefix_folded() {
        let seg = classify_marked("س+قام");
        assert!(seg.prefixes().is_empty());
        assert_eq!("سقام", seg.stem());
        assert_eq!(";سقام;", seg.to_string());

        let seg = classify_marked("و+س+قام");
        assert_eq!("و+;سقام;", seg.to_string());
    }

    #[test]
    fn test_sin_prefix_kept() {
        for stem in ["يكتب", "نكتب", "أكتب", "تكتب"] {
            let seg = classify_marked(&format!("س+{}", stem));
            assert_eq!(&["س"], seg.prefixes());
            assert_eq!(stem, seg.stem());
        }
    }

    #[test]
    fn test_markers_collapsed() {
        let seg = classify_marked("+و++ال+كتاب+");
        assert_eq!("و+ال+;كتاب;", seg.to_string());
    }

    #[test]
    fn test_empty() {
        assert_eq!(Segmentation::default(), classify_marked(""));
        assert_eq!(Segmentation::default(), classify_marked("+"));
    }

    #[test]
    fn test_glued_stem_reclassified() {
        // ا+ل glues into ال, which is then read as a prefix.
        let seg = classify(&["ا", "ل", "ه"]);
        assert_eq!("ال+;ه;", seg.to_string());
        assert_eq!(seg, classify_marked("ال+ه"));
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "و+ال+كتاب+ه",
            "س+قام",
            "ف+س+ي+كتب+ون+ها",
            "ك+ه",
            "ب+ا+ل+م+د+ر+س+ة",
            "ل+ل+ك+ت+ا+ب",
        ] {
            let seg = classify_marked(input);
            assert_eq!(seg, classify_marked(&seg.marked()), "{}", input);
        }
    }
}
