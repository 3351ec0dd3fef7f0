use std::io;
use std::path::PathBuf;

use crate::dictionary::MODEL_MAGIC;
use crate::errors::FarasaError;
use crate::tests::{load_dictionary, open_resource};
use crate::{Dictionary, Segmenter};

#[test]
fn test_load_tables() {
    let dict = load_dictionary();
    assert_eq!(Some(8.5), dict.word_count().get("كتاب"));
    assert_eq!(Some(0.05), dict.prob_prefix_suffix().get("و+ال+", ""));
    assert_eq!(Some(0.05), dict.prob_suffix_prefix().get("", "و+ال+"));
    assert!(dict.stop_words().contains("في"));
    assert!(dict.ara_lex_com().contains("مدرسة"));
    assert_eq!(
        Some(&["و+ب+ال+تالي".to_string()][..]),
        dict.known_tokenizations("وبالتالي")
    );
    assert_eq!(0.6, dict.general().has_template);
    assert_eq!(4.3, dict.general().average_stem_length);
    assert_eq!(3, dict.templates().num_roots());
    assert_eq!(4, dict.templates().num_templates());
}

#[test]
fn test_summary() {
    let dict = load_dictionary();
    assert_eq!(
        "7 words, 6 affix pairs, 2 stop words, 3 roots, 4 templates, 1 known tokenizations",
        dict.summary()
    );
}

#[test]
fn test_from_dir() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/tests/resources");
    let dict = Dictionary::from_dir(dir).unwrap();
    assert_eq!(Some(6.0), dict.word_count().get("كتب"));
}

#[test]
fn test_missing_table() {
    let result = Dictionary::from_opener(|name| match name {
        "hmStop.json" => Err(io::Error::from(io::ErrorKind::NotFound)),
        _ => open_resource(name),
    });
    match result {
        Err(FarasaError::MissingTable(e)) => assert_eq!("hmStop.json", e.table()),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("loaded without hmStop.json"),
    }
}

#[test]
fn test_missing_general_variable() {
    let result = Dictionary::from_opener(|name| match name {
        "generalVariables.json" => Ok(r#"{"hasTemplate": 0.6}"#.as_bytes()),
        _ => open_resource(name),
    });
    assert!(matches!(result, Err(FarasaError::InvalidFormat(_))));
}

#[test]
#[should_panic]
fn test_broken_json() {
    Dictionary::from_opener(|name| match name {
        "wordCount.json" => Ok(r#"{"كتاب": 8.5"#.as_bytes()),
        _ => open_resource(name),
    })
    .unwrap();
}

#[test]
#[should_panic]
fn test_non_object_table() {
    Dictionary::from_opener(|name| match name {
        "hmStop.json" => Ok(r#"["في"]"#.as_bytes()),
        _ => open_resource(name),
    })
    .unwrap();
}

#[test]
fn test_write_read() {
    let dict = load_dictionary();
    let mut model = vec![];
    let num_bytes = dict.write(&mut model).unwrap();
    assert_eq!(model.len(), num_bytes);
    assert!(model.starts_with(MODEL_MAGIC));

    let other = Dictionary::read(model.as_slice()).unwrap();
    assert_eq!(Some(8.5), other.word_count().get("كتاب"));
    assert_eq!(4, other.templates().num_templates());

    let segmenter = Segmenter::new(dict);
    let other = Segmenter::new(other);
    for word in ["والكتاب", "كتابه", "وبالتالي", "مدرستها"] {
        assert_eq!(
            segmenter.most_likely_partitions(word, 5),
            other.most_likely_partitions(word, 5)
        );
    }
}

#[test]
fn test_read_wrong_magic() {
    let result = Dictionary::read(b"FarasaModel 0.0\n".as_slice());
    assert!(matches!(result, Err(FarasaError::InvalidArgument(_))));
}
