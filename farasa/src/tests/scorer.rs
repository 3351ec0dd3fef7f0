use crate::classifier::classify_marked;
use crate::scorer::{features, score, NUM_FEATURES, UNSEEN_PAIR_PENALTY, UNSEEN_PENALTY, WEIGHTS};
use crate::tests::load_dictionary;

#[test]
fn test_features_known_stem() {
    let dict = load_dictionary();
    let f = features(&dict, &classify_marked("و+ال+كتاب"));

    assert_eq!(0.05f64.ln(), f[0]);
    assert_eq!(0.7f64.ln(), f[1]);
    assert_eq!(8.5, f[2]);
    assert_eq!(0.05f64.ln(), f[3]);
    assert_eq!(0.05f64.ln(), f[4]);
    // كتاب fits fEAl.
    assert_eq!(0.6f64.ln(), f[5]);
    assert_eq!(0.3f64.ln(), f[6]);
    assert_eq!((1.0f64 - 0.02).ln(), f[7]);
    assert_eq!(0.1f64.ln(), f[8]);
    assert_eq!(0.6f64.ln(), f[9]);
    assert_eq!(8.5, f[10]);
    assert_eq!(100f64.ln(), f[11]);
    assert_eq!((4.0f64 - 4.3).abs().ln(), f[12]);
    assert_eq!(8.5, f[13]);
    assert_eq!(1.0, f[14]);
    assert_eq!(-1.0, f[15]);
    assert_eq!(-1.0, f[16]);
    assert_eq!(-1.0, f[17]);
}

#[test]
fn test_features_unseen_stem() {
    let dict = load_dictionary();
    let f = features(&dict, &classify_marked("زرقاء"));

    assert_eq!(0.6f64.ln(), f[0]);
    assert_eq!(UNSEEN_PENALTY, f[2]);
    // No template of five letters fits, so the count of Y is used.
    assert_eq!((1.0f64 - 0.6).ln(), f[5]);
    assert_eq!(UNSEEN_PENALTY, f[10]);
    assert_eq!(50f64.ln(), f[11]);
    assert_eq!(UNSEEN_PAIR_PENALTY, f[13]);
    assert_eq!(-1.0, f[14]);
}

#[test]
fn test_features_unseen_affixes() {
    let dict = load_dictionary();
    let f = features(&dict, &classify_marked("ف+كتاب+كم"));

    assert_eq!(UNSEEN_PENALTY, f[0]);
    assert_eq!(UNSEEN_PENALTY, f[1]);
    assert_eq!(UNSEEN_PAIR_PENALTY, f[3]);
    assert_eq!(UNSEEN_PAIR_PENALTY, f[4]);
    assert_eq!(UNSEEN_PAIR_PENALTY, f[8]);
    assert_eq!(UNSEEN_PAIR_PENALTY, f[9]);
}

#[test]
fn test_features_maqsura_spelling() {
    let dict = load_dictionary();
    // The stop word list only has على.
    let f = features(&dict, &classify_marked("علي"));
    assert_eq!(1.0, f[17]);

    // The people list has no such fallback.
    let f = features(&dict, &classify_marked("محمدي"));
    assert_eq!(-1.0, f[16]);
}

#[test]
fn test_features_teh_marbuta_spelling() {
    let dict = load_dictionary();
    let f = features(&dict, &classify_marked("مدرس+ت+ها"));

    // مدرس is unseen, but مدرسة is.
    assert_eq!(5.0, f[2]);
    assert_eq!(5.0, f[13]);
}

#[test]
fn test_score_is_weighted_sum() {
    let dict = load_dictionary();
    let seg = classify_marked("و+ال+كتاب");
    let f = features(&dict, &seg);
    let mut expected = 0.0;
    for i in 0..NUM_FEATURES {
        expected += WEIGHTS[i] * f[i];
    }
    assert_eq!(expected, score(&dict, &seg));
}

#[test]
fn test_seen_suffix_scores_higher() {
    let dict = load_dictionary();
    // +ها has suffix probabilities while +ك has none, and neither appears
    // with the empty prefix or after كتاب.
    let seen = score(&dict, &classify_marked("كتاب+ها"));
    let unseen = score(&dict, &classify_marked("كتاب+ك"));
    assert!(seen > unseen, "{} <= {}", seen, unseen);
}

#[test]
fn test_features_maqsura_lists() {
    let dict = load_dictionary();

    // The morphology and Buckwalter lists only have مبنى.
    let f = features(&dict, &classify_marked("مبني"));
    assert_eq!(0.3f64.ln(), f[6]);
    assert_eq!(1.0, f[14]);

    // The gazetteer only has ليلى.
    let f = features(&dict, &classify_marked("ليلي"));
    assert_eq!(0.02f64.ln(), f[7]);
}

#[test]
fn test_features_maqsura_word_count() {
    let dict = load_dictionary();
    // The word count only has مستشفى.
    let f = features(&dict, &classify_marked("مستشفي"));
    assert_eq!(7.0, f[10]);
    // The stem count and the composite lexicon do not retry it.
    assert_eq!(UNSEEN_PENALTY, f[2]);
    assert_eq!(UNSEEN_PAIR_PENALTY, f[13]);
}

#[test]
fn test_features_locations_exact() {
    let dict = load_dictionary();
    let f = features(&dict, &classify_marked("بخارى"));
    assert_eq!(1.0, f[15]);

    let f = features(&dict, &classify_marked("بخاري"));
    assert_eq!(-1.0, f[15]);
}
