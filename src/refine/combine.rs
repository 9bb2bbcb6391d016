//! Morph combiner implementation.
//!
//! Dictionary-backed analyzers split compounds they do not know: 머신러닝
//! comes back as 머신 + 러닝, 아름답다 as 아름 + 답다. The combiner repairs
//! such sequences by rewriting contiguous windows that match a known
//! mis-segmentation pattern into single synthesized morphemes.
//!
//! # Examples
//!
//! ```
//! use malche::morpheme::{Morpheme, MorphTag};
//! use malche::refine::{CombineTable, MorphCombiner};
//!
//! let table = CombineTable::empty().with_fused(["아름", "답다"]);
//! let combiner = MorphCombiner::with_table(table);
//!
//! let combined = combiner.combine(vec![
//!     Morpheme::new("아름", MorphTag::Root, 0),
//!     Morpheme::new("답다", MorphTag::Unknown, 1),
//! ]);
//!
//! assert_eq!(combined.len(), 1);
//! assert_eq!(combined[0].surface, "아름답다");
//! assert!(combined[0].is_synthesized());
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::morpheme::Morpheme;

/// Default combine rules: compounds and adjective roots that mecab-ko-dic
/// based analyzers commonly split apart.
const DEFAULT_COMBINE_RULES: &[(&[&str], &str)] = &[
    (&["아름", "답다"], "아름답다"),
    (&["어리", "석다"], "어리석다"),
    (&["슬기", "롭다"], "슬기롭다"),
    (&["머신", "러닝"], "머신러닝"),
    (&["딥", "러닝"], "딥러닝"),
    (&["블록", "체인"], "블록체인"),
    (&["인공", "지능"], "인공지능"),
    (&["데이터", "베이스"], "데이터베이스"),
    (&["그래디언트", "디센트"], "그래디언트디센트"),
    (&["알고", "리즘"], "알고리즘"),
    (&["자연", "어", "처리"], "자연어처리"),
    (&["데이터", "사이언", "티스트"], "데이터사이언티스트"),
];

/// A table of combine rules: ordered surface windows and their replacements.
///
/// Keys are exact surface sequences (content and length both must match);
/// the value is the surface of the synthesized morpheme that replaces the
/// window. The table also tracks the distinct window lengths in ascending
/// order so the scan can stop probing as soon as the remainder of the
/// stream is too short.
///
/// # Examples
///
/// ```
/// use malche::refine::CombineTable;
///
/// let table = CombineTable::empty()
///     .with_rule(["그랜드", "캐니언"], "그랜드캐니언")
///     .with_fused(["딥", "러닝"]);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.lengths(), &[2]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CombineTable {
    /// Surface window -> replacement surface.
    rules: AHashMap<Vec<String>, String>,
    /// Distinct window lengths, ascending.
    lengths: Vec<usize>,
}

impl CombineTable {
    /// Create a table with the default embedded rules.
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (parts, replacement) in DEFAULT_COMBINE_RULES {
            table.insert(parts.iter().copied(), *replacement);
        }
        table
    }

    /// Create an empty table.
    pub fn empty() -> Self {
        CombineTable {
            rules: AHashMap::new(),
            lengths: Vec::new(),
        }
    }

    /// Insert a rule mapping a surface window to a replacement surface.
    ///
    /// Windows shorter than two surfaces, or containing an empty surface,
    /// cannot describe a mis-split and are ignored. Rejecting empty parts
    /// also keeps suppressed placeholders unmatchable.
    pub fn insert<P, S, R>(&mut self, parts: P, replacement: R)
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        R: Into<String>,
    {
        let key: Vec<String> = parts.into_iter().map(Into::into).collect();
        if key.len() < 2 || key.iter().any(|part| part.is_empty()) {
            debug!("degenerate combine rule {:?} ignored", key);
            return;
        }

        if let Err(idx) = self.lengths.binary_search(&key.len()) {
            self.lengths.insert(idx, key.len());
        }
        self.rules.insert(key, replacement.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_rule<P, S, R>(mut self, parts: P, replacement: R) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        R: Into<String>,
    {
        self.insert(parts, replacement);
        self
    }

    /// Builder-style insert where the replacement is the concatenation of
    /// the window surfaces.
    pub fn with_fused<P, S>(self, parts: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key: Vec<String> = parts.into_iter().map(Into::into).collect();
        let replacement = key.concat();
        self.with_rule(key, replacement)
    }

    /// The replacement surface for the given window, if a rule matches it.
    pub fn replacement(&self, window: &[String]) -> Option<&str> {
        self.rules.get(window).map(String::as_str)
    }

    /// The distinct window lengths in ascending order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for CombineTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of one combine rule.
#[derive(serde::Serialize, serde::Deserialize)]
struct CombineRule {
    parts: Vec<String>,
    into: String,
}

// Rule files carry the table as a list of {parts, into} entries; the map and
// the length index are rebuilt on load.
impl Serialize for CombineTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&Vec<String>, &String)> = self.rules.iter().collect();
        entries.sort();

        let rules: Vec<CombineRule> = entries
            .into_iter()
            .map(|(parts, into)| CombineRule {
                parts: parts.clone(),
                into: into.clone(),
            })
            .collect();
        rules.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CombineTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rules = Vec::<CombineRule>::deserialize(deserializer)?;
        let mut table = CombineTable::empty();
        for rule in rules {
            table.insert(rule.parts, rule.into);
        }
        Ok(table)
    }
}

/// Rewrites morpheme windows that match a combine rule into single
/// synthesized morphemes.
///
/// The scan runs forward over the input into a fresh output buffer, so
/// shrinkage needs no index bookkeeping. At each cursor position the
/// configured window lengths are tried in ascending order; the first rule
/// whose key equals the window exactly wins, and the scan then advances
/// past the whole window, never re-matching into the combined token.
///
/// # Examples
///
/// ```
/// use malche::morpheme::{Morpheme, MorphTag};
/// use malche::refine::MorphCombiner;
///
/// let combiner = MorphCombiner::new(); // embedded default rules
///
/// let combined = combiner.combine(vec![
///     Morpheme::new("머신", MorphTag::CommonNoun, 0),
///     Morpheme::new("러닝", MorphTag::CommonNoun, 1),
///     Morpheme::new("강의", MorphTag::CommonNoun, 2),
/// ]);
///
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined[0].surface, "머신러닝");
/// assert_eq!(combined[1].surface, "강의");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MorphCombiner {
    table: Arc<CombineTable>,
}

impl MorphCombiner {
    /// Create a combiner with the default embedded rules.
    pub fn new() -> Self {
        Self::with_table(CombineTable::new())
    }

    /// Create a combiner with the given rule table.
    pub fn with_table(table: CombineTable) -> Self {
        MorphCombiner {
            table: Arc::new(table),
        }
    }

    /// The rule table backing this combiner.
    pub fn table(&self) -> &CombineTable {
        &self.table
    }

    /// Apply the combine rules to a morpheme sequence.
    ///
    /// Suppressed morphemes are dropped outright and never participate in a
    /// window. Unmatched morphemes pass through unchanged, so the output is
    /// never longer than the input.
    pub fn combine(&self, morphs: Vec<Morpheme>) -> Vec<Morpheme> {
        if self.table.is_empty() || morphs.is_empty() {
            return morphs;
        }

        // One contiguous surface buffer so each window probe is a plain
        // slice lookup.
        let surfaces: Vec<String> = morphs.iter().map(|m| m.surface.clone()).collect();

        let mut output = Vec::with_capacity(morphs.len());
        let mut cursor = 0;

        while cursor < morphs.len() {
            if morphs[cursor].is_suppressed() {
                cursor += 1;
                continue;
            }

            match self.match_window(&surfaces, cursor) {
                Some((window_len, replacement)) => {
                    let first = &morphs[cursor];
                    let last = &morphs[cursor + window_len - 1];
                    debug!(
                        "combined {} morphemes at position {} into '{}'",
                        window_len, first.position, replacement
                    );
                    output.push(
                        Morpheme::synthesized(replacement, first.position)
                            .with_span(first.start_offset, last.end_offset),
                    );
                    cursor += window_len;
                }
                None => {
                    output.push(morphs[cursor].clone());
                    cursor += 1;
                }
            }
        }

        output
    }

    /// Find the shortest rule matching the window starting at `start`.
    fn match_window<'a>(&'a self, surfaces: &[String], start: usize) -> Option<(usize, &'a str)> {
        let remaining = surfaces.len() - start;
        for &len in self.table.lengths() {
            if len > remaining {
                // Lengths are ascending; nothing longer can fit either.
                break;
            }
            if let Some(replacement) = self.table.replacement(&surfaces[start..start + len]) {
                return Some((len, replacement));
            }
        }
        None
    }
}
