//! # Farasa
//!
//! Farasa is a statistical segmenter of Arabic words. A word such as
//! `والكتابه` is split into prefix morphemes, a stem, and suffix morphemes
//! (`و+ال+كتاب+ه`) by enumerating candidate boundaries over the word and
//! choosing the candidate with the highest log-linear score.
//!
//! ## Examples
//!
//! ```no_run
//! use farasa::{Dictionary, Segmenter};
//!
//! let dict = Dictionary::from_dir("data")?;
//! let segmenter = Segmenter::new(dict);
//!
//! let mut worker = segmenter.new_worker();
//! worker.reset_word("والكتاب");
//! worker.segment(1);
//! if let Some(best) = worker.best() {
//!     println!("{}", best.segmentation().marked());
//! }
//! # Ok::<(), farasa::errors::FarasaError>(())
//! ```
#![deny(missing_docs)]

pub mod buckwalter;
pub mod cache;
pub mod classifier;
pub mod common;
pub mod dictionary;
pub mod errors;
pub mod partition;
pub mod scheme;
pub mod scorer;
pub mod segmentation;
pub mod segmenter;
pub mod tokenizer;
mod utils;

#[cfg(test)]
mod tests;

pub use cache::SegmentCache;
pub use dictionary::Dictionary;
pub use scheme::{Normalizer, Scheme};
pub use segmentation::{ScoredSegmentation, Segmentation};
pub use segmenter::Segmenter;
pub use tokenizer::Tokenizer;
