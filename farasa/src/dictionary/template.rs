//! Root-and-pattern matching of stems.
//!
//! A template is a skeleton over Buckwalter letters where `f`, `E`, and `l`
//! stand for the first, middle, and last radicals, `C` stands for an extra
//! radical, and every other letter must appear literally. Fitting a stem
//! means finding a template of the same length whose literal letters agree
//! with the stem and whose extracted radicals form a known root.
use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, BufReader, Read};

use bincode::{Decode, Encode};

use crate::buckwalter::{to_buckwalter, to_morph};
use crate::common::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, ALEF_MAQSURA, DAL, HAMZA, TAH, TEH,
    TEH_MARBUTA, WAW, WAW_HAMZA, YEH, YEH_HAMZA,
};
use crate::errors::{FarasaError, Result};
use crate::utils::parse_tsv_row;

/// Template assigned to two-letter stems of geminate roots.
pub const GEMINATE_TEMPLATE: &str = "fE";

const WEAK_LETTERS: [char; 3] = ['w', 'y', 'A'];

const YEH_TEH_MARBUTA: &str = "\u{064A}\u{0629}";

/// A template fitted to a stem together with the root it yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateFit<'a> {
    template: &'a str,
    root: &'a str,
}

impl<'a> TemplateFit<'a> {
    /// Gets the template.
    #[inline(always)]
    pub const fn template(&self) -> &'a str {
        self.template
    }

    /// Gets the root in the morphological encoding.
    #[inline(always)]
    pub const fn root(&self) -> &'a str {
        self.root
    }
}

/// Matcher of stems against templates and a root dictionary.
#[derive(Default, Decode, Encode)]
pub struct TemplateMatcher {
    roots: HashMap<String, f64>,
    weights: HashMap<String, f64>,
    // Templates grouped by their length in characters, in file order.
    by_len: BTreeMap<u32, Vec<String>>,
}

impl TemplateMatcher {
    /// Creates a new instance from a root table and a template table.
    ///
    /// Both are tab-separated with a key and a weight per line. Roots are in
    /// the morphological encoding, templates in Buckwalter. A template listed
    /// twice keeps its first weight.
    ///
    /// # Errors
    ///
    /// [`FarasaError`] is returned when a weight cannot be parsed.
    pub fn from_readers<R, T>(roots_rdr: R, templates_rdr: T) -> Result<Self>
    where
        R: Read,
        T: Read,
    {
        let mut roots = HashMap::new();
        for (key, weight) in Self::parse_weights("roots.txt", roots_rdr)? {
            roots.insert(key, weight);
        }

        let mut weights = HashMap::new();
        let mut by_len: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for (key, weight) in Self::parse_weights("template-count.txt", templates_rdr)? {
            if weights.contains_key(&key) {
                continue;
            }
            let len = u32::try_from(key.chars().count()).map_err(|_| {
                FarasaError::invalid_format("template-count.txt", "too long template")
            })?;
            by_len.entry(len).or_default().push(key.clone());
            weights.insert(key, weight);
        }

        Ok(Self {
            roots,
            weights,
            by_len,
        })
    }

    fn parse_weights<R>(table: &'static str, rdr: R) -> Result<Vec<(String, f64)>>
    where
        R: Read,
    {
        let mut entries = vec![];
        for (i, line) in BufReader::new(rdr).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields = parse_tsv_row(&line).ok_or_else(|| {
                let msg = format!("Too long field (at line {})", i + 1);
                FarasaError::invalid_format(table, msg)
            })?;
            if fields.len() != 2 {
                let msg = format!("A row must have two items, {:?} (at line {})", fields, i + 1);
                return Err(FarasaError::invalid_format(table, msg));
            }
            let weight = fields[1].trim().parse().map_err(|_| {
                let msg = format!("Invalid weight {:?} (at line {})", fields[1], i + 1);
                FarasaError::invalid_format(table, msg)
            })?;
            let mut fields = fields.into_iter();
            if let Some(key) = fields.next() {
                entries.push((key, weight));
            }
        }
        Ok(entries)
    }

    /// Gets the number of roots.
    pub fn num_roots(&self) -> usize {
        self.roots.len()
    }

    /// Gets the number of distinct templates.
    pub fn num_templates(&self) -> usize {
        self.weights.len()
    }

    /// Fits a stem written in Arabic script.
    ///
    /// When the stem does not fit as it is, a fixed sequence of orthographic
    /// variants is tried in order, and the first variant that fits wins.
    /// Returns [`None`] when nothing fits.
    pub fn fit(&self, stem: &str) -> Option<TemplateFit<'_>> {
        let mut fit = self.fit_arabic(stem);

        // ta-marbuta or yeh ending
        if fit.is_none() {
            if let Some(s) = stem.strip_suffix(&[TEH_MARBUTA, YEH][..]) {
                fit = self.fit_arabic(s);
            }
        }
        // yeh + ta-marbuta ending
        if fit.is_none() {
            if let Some(s) = stem.strip_suffix(YEH_TEH_MARBUTA) {
                fit = self.fit_arabic(s);
            }
        }
        // alef-maqsura ending
        if fit.is_none() {
            if let Some(s) = stem.strip_suffix(ALEF_MAQSURA) {
                fit = self.fit_arabic(&format!("{}{}", s, YEH));
            }
        }
        // hamza on alef
        if fit.is_none() && stem.contains(&[ALEF_HAMZA_ABOVE, ALEF_MADDA, ALEF_HAMZA_BELOW][..]) {
            let s = stem.replace(
                &[ALEF_HAMZA_ABOVE, ALEF_MADDA, ALEF_HAMZA_BELOW][..],
                &ALEF.to_string(),
            );
            fit = self.fit_arabic(&s);
        }
        // doubled last letter
        if fit.is_none() {
            if let Some(last) = stem.chars().last().filter(|_| stem.chars().count() > 1) {
                fit = self.fit_arabic(&format!("{}{}", stem, last));
            }
        }
        // alef + teh opening
        if fit.is_none() {
            if let Some(rest) = stem.strip_prefix(ALEF).filter(|r| r.starts_with(TEH)) {
                fit = self.fit_arabic(&format!("{}{}{}", ALEF, WAW, rest));
            }
        }
        // tah or dal after the infixed teh of the ifta'al form
        if fit.is_none() {
            let chars: Vec<char> = stem.chars().collect();
            if chars.len() >= 5 && (chars[2] == TAH || chars[2] == DAL) {
                let s: String = chars[..2]
                    .iter()
                    .chain(&[TEH])
                    .chain(&chars[3..])
                    .collect();
                let potential = self.fit_arabic(&s);
                let infixed = potential.map_or(false, |p| {
                    p.template.chars().count() > 3 && p.template.chars().nth(2) == Some('t')
                });
                if infixed {
                    fit = potential;
                }
            }
        }
        // alef-madda
        if fit.is_none() && stem.contains(ALEF_MADDA) {
            let s = stem.replace(ALEF_MADDA, "\u{0623}\u{0627}");
            fit = self.fit_arabic(&s);
        }
        // hamza on waw or yeh
        if fit.is_none() && stem.contains(&[YEH_HAMZA, WAW_HAMZA][..]) {
            let s = stem.replace(&[YEH_HAMZA, WAW_HAMZA][..], &HAMZA.to_string());
            fit = self.fit_arabic(&s);
        }

        fit
    }

    #[inline(always)]
    fn fit_arabic(&self, stem: &str) -> Option<TemplateFit<'_>> {
        self.fit_buckwalter(&to_buckwalter(stem))
    }

    /// Fits a stem written in Buckwalter without trying variants.
    pub fn fit_buckwalter(&self, stem: &str) -> Option<TemplateFit<'_>> {
        let chars: Vec<char> = stem.chars().collect();
        let templates = self.by_len.get(&u32::try_from(chars.len()).ok()?)?;

        if chars.len() == 2 {
            let doubled = format!("{}{}", stem, chars[1]);
            let (root, _) = self.roots.get_key_value(to_morph(&doubled).as_str())?;
            return Some(TemplateFit {
                template: GEMINATE_TEMPLATE,
                root: root.as_str(),
            });
        }

        let mut hits = vec![];
        for template in templates {
            let Some(radicals) = extract_radicals(template, &chars) else {
                continue;
            };
            let radicals = to_morph(&radicals);
            if let Some((root, _)) = self.roots.get_key_value(radicals.as_str()) {
                hits.push(TemplateFit {
                    template: template.as_str(),
                    root: root.as_str(),
                });
            } else {
                for root in self.weak_variants(&radicals) {
                    hits.push(TemplateFit {
                        template: template.as_str(),
                        root,
                    });
                }
            }
        }

        // Templates made only of radical slots and literals are preferred
        // over those that need an extra radical.
        let has_plain = hits.iter().any(|h| !h.template.contains('C'));
        self.best_fit(
            hits.into_iter()
                .filter(|h| !has_plain || !h.template.contains('C')),
        )
    }

    /// Roots found by replacing one weak letter of `radicals` with another.
    fn weak_variants<'a>(&'a self, radicals: &str) -> Vec<&'a str> {
        let chars: Vec<char> = radicals.chars().collect();
        let mut variants = vec![];
        for (i, c) in chars.iter().enumerate() {
            if !WEAK_LETTERS.contains(c) {
                continue;
            }
            for w in WEAK_LETTERS {
                let candidate: String = chars[..i]
                    .iter()
                    .chain(&[w])
                    .chain(&chars[i + 1..])
                    .collect();
                if let Some((root, _)) = self.roots.get_key_value(candidate.as_str()) {
                    variants.push(root.as_str());
                }
            }
        }
        variants
    }

    fn best_fit<'a, I>(&self, hits: I) -> Option<TemplateFit<'a>>
    where
        I: IntoIterator<Item = TemplateFit<'a>>,
    {
        let mut best = None;
        let mut best_score = 0.0;
        for hit in hits {
            let (Some(r), Some(t)) = (self.roots.get(hit.root), self.weights.get(hit.template))
            else {
                continue;
            };
            let score = r * t;
            if best_score < score {
                best_score = score;
                best = Some(hit);
            }
        }
        best
    }
}

/// Reads the radicals of `stem` through `template`, or returns [`None`] when
/// the stem does not agree with the template.
fn extract_radicals(template: &str, stem: &[char]) -> Option<String> {
    let mut radicals = String::new();
    let mut middle = None;
    let mut last = None;
    for (&s, t) in stem.iter().zip(template.chars()) {
        match t {
            'f' | 'C' => radicals.push(s),
            'E' => match middle {
                None => {
                    radicals.push(s);
                    middle = Some(s);
                }
                Some(m) if m != s => return None,
                Some(_) => (),
            },
            'l' => match last {
                None => {
                    radicals.push(s);
                    last = Some(s);
                }
                Some(m) if m != s => return None,
                Some(_) => (),
            },
            _ if t != s => return None,
            _ => (),
        }
    }
    Some(radicals)
}
