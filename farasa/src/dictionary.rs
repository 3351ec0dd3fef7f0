//! Dictionary for segmentation.
pub(crate) mod builder;
pub(crate) mod table;
pub mod template;

use std::collections::HashMap;
use std::io::{Read, Write};

use bincode::{Decode, Encode};
use log::info;

use crate::common;
use crate::errors::{FarasaError, Result};
use table::{MemberSet, PairTable, ValueTable};
use template::TemplateMatcher;

/// Magic bytes at the head of a compiled model.
pub const MODEL_MAGIC: &[u8] = b"FarasaModel 0.1\n";

/// Corpus-level constants of the scoring model.
#[derive(Clone, Copy, Debug, Default, Decode, Encode)]
pub struct GeneralVariables {
    /// Probability that a stem fits some template.
    pub has_template: f64,
    /// Probability that a stem is in the morphology list.
    pub in_morph_list: f64,
    /// Probability that a stem is in the gazetteer.
    pub in_gaz_list: f64,
    /// Average stem length in characters.
    pub average_stem_length: f64,
}

/// Inner data of [`Dictionary`].
#[derive(Decode, Encode)]
pub(crate) struct DictionaryInner {
    word_count: ValueTable,
    prob_prefixes: ValueTable,
    prob_suffixes: ValueTable,
    prob_cond_prefixes: ValueTable,
    prob_cond_suffixes: ValueTable,
    template_count: ValueTable,
    prob_prefix_suffix: PairTable,
    prob_suffix_prefix: PairTable,
    morph_list: MemberSet,
    gazetteer: MemberSet,
    ara_lex_com: MemberSet,
    buckwalter_list: MemberSet,
    locations: MemberSet,
    people: MemberSet,
    stop_words: MemberSet,
    known_tokenizations: HashMap<String, Vec<String>>,
    general: GeneralVariables,
    templates: TemplateMatcher,
}

/// Dictionary for segmentation.
///
/// It holds every statistical table and the template matcher. The contents
/// never change after loading.
pub struct Dictionary(pub(crate) DictionaryInner);

impl Dictionary {
    /// Gets the word frequencies.
    #[inline(always)]
    pub(crate) const fn word_count(&self) -> &ValueTable {
        &self.0.word_count
    }

    /// Gets the prefix probabilities keyed by prefix field.
    #[inline(always)]
    pub(crate) const fn prob_prefixes(&self) -> &ValueTable {
        &self.0.prob_prefixes
    }

    /// Gets the suffix probabilities keyed by suffix field.
    #[inline(always)]
    pub(crate) const fn prob_suffixes(&self) -> &ValueTable {
        &self.0.prob_suffixes
    }

    #[inline(always)]
    pub(crate) const fn prob_cond_prefixes(&self) -> &ValueTable {
        &self.0.prob_cond_prefixes
    }

    #[inline(always)]
    pub(crate) const fn prob_cond_suffixes(&self) -> &ValueTable {
        &self.0.prob_cond_suffixes
    }

    /// Gets the template frequencies.
    #[inline(always)]
    pub(crate) const fn template_count(&self) -> &ValueTable {
        &self.0.template_count
    }

    #[inline(always)]
    pub(crate) const fn prob_prefix_suffix(&self) -> &PairTable {
        &self.0.prob_prefix_suffix
    }

    #[inline(always)]
    pub(crate) const fn prob_suffix_prefix(&self) -> &PairTable {
        &self.0.prob_suffix_prefix
    }

    #[inline(always)]
    pub(crate) const fn morph_list(&self) -> &MemberSet {
        &self.0.morph_list
    }

    #[inline(always)]
    pub(crate) const fn gazetteer(&self) -> &MemberSet {
        &self.0.gazetteer
    }

    /// Gets the composite lexicon.
    #[inline(always)]
    pub(crate) const fn ara_lex_com(&self) -> &MemberSet {
        &self.0.ara_lex_com
    }

    #[inline(always)]
    pub(crate) const fn buckwalter_list(&self) -> &MemberSet {
        &self.0.buckwalter_list
    }

    #[inline(always)]
    pub(crate) const fn locations(&self) -> &MemberSet {
        &self.0.locations
    }

    #[inline(always)]
    pub(crate) const fn people(&self) -> &MemberSet {
        &self.0.people
    }

    #[inline(always)]
    pub(crate) const fn stop_words(&self) -> &MemberSet {
        &self.0.stop_words
    }

    /// Gets the precomputed tokenizations of a word without markers.
    #[inline(always)]
    pub(crate) fn known_tokenizations(&self, word: &str) -> Option<&[String]> {
        self.0.known_tokenizations.get(word).map(Vec::as_slice)
    }

    /// Gets the corpus-level constants.
    #[inline(always)]
    pub const fn general(&self) -> &GeneralVariables {
        &self.0.general
    }

    /// Gets the template matcher.
    #[inline(always)]
    pub const fn templates(&self) -> &TemplateMatcher {
        &self.0.templates
    }

    /// Exports the dictionary data.
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    pub fn write<W>(&self, mut wtr: W) -> Result<usize>
    where
        W: Write,
    {
        wtr.write_all(MODEL_MAGIC)?;
        let num_bytes =
            bincode::encode_into_std_write(&self.0, &mut wtr, common::bincode_config())?;
        Ok(MODEL_MAGIC.len() + num_bytes)
    }

    /// Creates a dictionary from a reader.
    ///
    /// # Errors
    ///
    /// [`FarasaError`] is returned when the magic bytes do not match or bincode
    /// fails to decode the rest.
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        if magic != MODEL_MAGIC {
            return Err(FarasaError::invalid_argument(
                "rdr",
                "The magic number of the input model mismatches.",
            ));
        }
        let data: DictionaryInner =
            bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        let dict = Self(data);
        info!("loaded a compiled model: {}", dict.summary());
        Ok(dict)
    }

    /// Describes the table sizes in one line.
    pub(crate) fn summary(&self) -> String {
        format!(
            "{} words, {} affix pairs, {} stop words, {} roots, {} templates, {} known tokenizations",
            self.0.word_count.len(),
            self.0.prob_prefix_suffix.len() + self.0.prob_suffix_prefix.len(),
            self.0.stop_words.len(),
            self.0.templates.num_roots(),
            self.0.templates.num_templates(),
            self.0.known_tokenizations.len(),
        )
    }
}
