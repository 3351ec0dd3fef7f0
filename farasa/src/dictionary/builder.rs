use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::dictionary::{
    Dictionary, DictionaryInner, GeneralVariables, MemberSet, PairTable, TemplateMatcher,
    ValueTable,
};
use crate::errors::{FarasaError, Result};

/// File name of the root table.
pub const ROOTS_FILE: &str = "roots.txt";
/// File name of the template table.
pub const TEMPLATES_FILE: &str = "template-count.txt";

impl Dictionary {
    /// Loads every table from a directory.
    ///
    /// # Errors
    ///
    /// [`FarasaError::MissingTable`] is returned when a table file does not
    /// exist, and [`FarasaError::InvalidFormat`] when its content is malformed.
    pub fn from_dir<P>(dir: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        let dict = Self::from_opener(|name| File::open(dir.join(name)).map(BufReader::new))?;
        info!("loaded tables from {}: {}", dir.display(), dict.summary());
        Ok(dict)
    }

    /// Loads every table through `open`, which maps a table file name such as
    /// `wordCount.json` to a reader of its content.
    ///
    /// # Errors
    ///
    /// [`FarasaError::MissingTable`] is returned when `open` fails with
    /// [`io::ErrorKind::NotFound`], and [`FarasaError::InvalidFormat`] when a
    /// table is malformed.
    pub fn from_opener<F, R>(mut open: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> io::Result<R>,
        R: Read,
    {
        let mut object = |name: &'static str| -> Result<Map<String, Value>> {
            let rdr = open_table(&mut open, name)?;
            let value: Value = serde_json::from_reader(rdr)?;
            let Value::Object(map) = value else {
                return Err(FarasaError::invalid_format(name, "A JSON object is expected."));
            };
            debug!("{}: {} entries", name, map.len());
            Ok(map)
        };

        let word_count = value_table("wordCount.json", object("wordCount.json")?)?;
        let prob_prefixes = value_table("probPrefixes.json", object("probPrefixes.json")?)?;
        let prob_suffixes = value_table("probSuffixes.json", object("probSuffixes.json")?)?;
        let prob_cond_prefixes =
            value_table("probCondPrefixes.json", object("probCondPrefixes.json")?)?;
        let prob_cond_suffixes =
            value_table("probCondSuffixes.json", object("probCondSuffixes.json")?)?;
        let template_count = value_table("hmTemplateCount.json", object("hmTemplateCount.json")?)?;
        let prob_prefix_suffix =
            pair_table("probPrefixSuffix.json", object("probPrefixSuffix.json")?)?;
        let prob_suffix_prefix =
            pair_table("probSuffixPrefix.json", object("probSuffixPrefix.json")?)?;

        let morph_list = member_set(object("hmListMorph.json")?);
        let gazetteer = member_set(object("hmListGaz.json")?);
        let ara_lex_com = member_set(object("hmAraLexCom.json")?);
        let buckwalter_list = member_set(object("hmBuck.json")?);
        let locations = member_set(object("hmLocations.json")?);
        let people = member_set(object("hmPeople.json")?);
        let stop_words = member_set(object("hmStop.json")?);

        let known_tokenizations = known_tokenizations(
            "hmPreviouslySeenTokenizations.json",
            object("hmPreviouslySeenTokenizations.json")?,
        )?;
        let general = general_variables(
            "generalVariables.json",
            &value_table("generalVariables.json", object("generalVariables.json")?)?,
        )?;

        let templates = TemplateMatcher::from_readers(
            open_table(&mut open, ROOTS_FILE)?,
            open_table(&mut open, TEMPLATES_FILE)?,
        )?;
        debug!(
            "{} roots, {} templates",
            templates.num_roots(),
            templates.num_templates()
        );

        Ok(Self(DictionaryInner {
            word_count,
            prob_prefixes,
            prob_suffixes,
            prob_cond_prefixes,
            prob_cond_suffixes,
            template_count,
            prob_prefix_suffix,
            prob_suffix_prefix,
            morph_list,
            gazetteer,
            ara_lex_com,
            buckwalter_list,
            locations,
            people,
            stop_words,
            known_tokenizations,
            general,
            templates,
        }))
    }
}

fn open_table<F, R>(open: &mut F, name: &'static str) -> Result<R>
where
    F: FnMut(&'static str) -> io::Result<R>,
{
    open(name).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FarasaError::missing_table(name),
        _ => FarasaError::from(e),
    })
}

fn number(table: &'static str, key: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        let msg = format!("The value of {:?} must be a number, but got {}", key, value);
        FarasaError::invalid_format(table, msg)
    })
}

fn value_table(table: &'static str, map: Map<String, Value>) -> Result<ValueTable> {
    map.into_iter()
        .map(|(key, value)| {
            let value = number(table, &key, &value)?;
            Ok((key, value))
        })
        .collect()
}

fn member_set(map: Map<String, Value>) -> MemberSet {
    map.into_iter().map(|(key, _)| key).collect()
}

fn pair_table(table: &'static str, map: Map<String, Value>) -> Result<PairTable> {
    let mut nested = vec![];
    for (first, inner) in map {
        let Value::Object(inner) = inner else {
            let msg = format!("The value of {:?} must be an object", first);
            return Err(FarasaError::invalid_format(table, msg));
        };
        let mut row = vec![];
        for (second, value) in inner {
            let value = number(table, &second, &value)?;
            row.push((second, value));
        }
        nested.push((first, row));
    }
    Ok(PairTable::from_nested(nested))
}

fn known_tokenizations(
    table: &'static str,
    map: Map<String, Value>,
) -> Result<HashMap<String, Vec<String>>> {
    let mut known = HashMap::with_capacity(map.len());
    for (word, value) in map {
        let Value::Array(items) = value else {
            let msg = format!("The value of {:?} must be an array", word);
            return Err(FarasaError::invalid_format(table, msg));
        };
        let mut tokenizations = Vec::with_capacity(items.len());
        for item in items {
            let Value::String(tokenization) = item else {
                let msg = format!("The tokenizations of {:?} must be strings", word);
                return Err(FarasaError::invalid_format(table, msg));
            };
            tokenizations.push(tokenization);
        }
        known.insert(word, tokenizations);
    }
    Ok(known)
}

fn general_variables(table: &'static str, values: &ValueTable) -> Result<GeneralVariables> {
    let get = |key: &str| {
        values.get(key).ok_or_else(|| {
            FarasaError::invalid_format(table, format!("{} is not defined", key))
        })
    };
    Ok(GeneralVariables {
        has_template: get("hasTemplate")?,
        in_morph_list: get("inMorphList")?,
        in_gaz_list: get("inGazList")?,
        average_stem_length: get("averageStemLength")?,
    })
}
