mod dictionary;
mod scorer;

use std::io;

use crate::Dictionary;

const WORD_COUNT: &str = include_str!("./tests/resources/wordCount.json");
const PROB_PREFIXES: &str = include_str!("./tests/resources/probPrefixes.json");
const PROB_SUFFIXES: &str = include_str!("./tests/resources/probSuffixes.json");
const PROB_COND_PREFIXES: &str = include_str!("./tests/resources/probCondPrefixes.json");
const PROB_COND_SUFFIXES: &str = include_str!("./tests/resources/probCondSuffixes.json");
const PROB_PREFIX_SUFFIX: &str = include_str!("./tests/resources/probPrefixSuffix.json");
const PROB_SUFFIX_PREFIX: &str = include_str!("./tests/resources/probSuffixPrefix.json");
const TEMPLATE_COUNT: &str = include_str!("./tests/resources/hmTemplateCount.json");
const LIST_MORPH: &str = include_str!("./tests/resources/hmListMorph.json");
const LIST_GAZ: &str = include_str!("./tests/resources/hmListGaz.json");
const ARA_LEX_COM: &str = include_str!("./tests/resources/hmAraLexCom.json");
const BUCK: &str = include_str!("./tests/resources/hmBuck.json");
const LOCATIONS: &str = include_str!("./tests/resources/hmLocations.json");
const PEOPLE: &str = include_str!("./tests/resources/hmPeople.json");
const STOP: &str = include_str!("./tests/resources/hmStop.json");
const KNOWN: &str = include_str!("./tests/resources/hmPreviouslySeenTokenizations.json");
const GENERAL: &str = include_str!("./tests/resources/generalVariables.json");
const ROOTS: &str = include_str!("./tests/resources/roots.txt");
const TEMPLATES: &str = include_str!("./tests/resources/template-count.txt");

fn open_resource(name: &str) -> io::Result<&'static [u8]> {
    let content = match name {
        "wordCount.json" => WORD_COUNT,
        "probPrefixes.json" => PROB_PREFIXES,
        "probSuffixes.json" => PROB_SUFFIXES,
        "probCondPrefixes.json" => PROB_COND_PREFIXES,
        "probCondSuffixes.json" => PROB_COND_SUFFIXES,
        "probPrefixSuffix.json" => PROB_PREFIX_SUFFIX,
        "probSuffixPrefix.json" => PROB_SUFFIX_PREFIX,
        "hmTemplateCount.json" => TEMPLATE_COUNT,
        "hmListMorph.json" => LIST_MORPH,
        "hmListGaz.json" => LIST_GAZ,
        "hmAraLexCom.json" => ARA_LEX_COM,
        "hmBuck.json" => BUCK,
        "hmLocations.json" => LOCATIONS,
        "hmPeople.json" => PEOPLE,
        "hmStop.json" => STOP,
        "hmPreviouslySeenTokenizations.json" => KNOWN,
        "generalVariables.json" => GENERAL,
        "roots.txt" => ROOTS,
        "template-count.txt" => TEMPLATES,
        _ => return Err(io::Error::from(io::ErrorKind::NotFound)),
    };
    Ok(content.as_bytes())
}

fn load_dictionary() -> Dictionary {
    Dictionary::from_opener(open_resource).unwrap()
}
