//! Morpheme types and utilities.
//!
//! This module defines the core data structures that flow through the
//! refinement pipeline: analyzed [`Morpheme`]s, their [`MorphKind`] state,
//! and the mecab-ko-dic [`MorphTag`] inventory.
//!
//! # Morpheme states
//!
//! A morpheme is either the direct output of a morphological analyzer
//! (`Analyzed`), a repair produced by the combiner when the analyzer
//! mis-split a compound (`Synthesized`), or a placeholder left behind by a
//! consumed combine window (`Suppressed`). Downstream stages treat these
//! states explicitly: synthesized morphemes always survive validation,
//! suppressed ones never do.
//!
//! # Examples
//!
//! Creating a plain analyzed morpheme:
//!
//! ```
//! use malche::morpheme::{Morpheme, MorphTag};
//!
//! let m = Morpheme::new("개", MorphTag::CommonNoun, 0);
//! assert_eq!(m.surface, "개");
//! assert_eq!(m.tag(), Some(MorphTag::CommonNoun));
//! ```
//!
//! Creating a morpheme with byte offsets into the analyzed text:
//!
//! ```
//! use malche::morpheme::{Morpheme, MorphTag};
//!
//! let m = Morpheme::with_offsets("짖", MorphTag::Verb, 2, 9, 12);
//! assert_eq!(m.start_offset, 9);
//! assert_eq!(m.end_offset, 12);
//! ```

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A single morpheme: the smallest segmented unit of analyzed text.
///
/// This is the unit that flows through the refinement pipeline. The surface
/// form is the text as segmented; `position` is the 0-based index in the
/// analyzer's output stream; the offsets are byte offsets into the analyzed
/// (normalized) text, or 0/0 when the producing analyzer does not track them.
///
/// # Examples
///
/// ```
/// use malche::morpheme::{Morpheme, MorphKind, MorphTag};
///
/// let m = Morpheme::new("아름답다", MorphTag::Adjective, 0);
/// assert!(!m.is_synthesized());
///
/// let fused = Morpheme::synthesized("아름답다", 0);
/// assert_eq!(fused.kind, MorphKind::Synthesized);
/// assert!(fused.is_synthesized());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Morpheme {
    /// The surface form of the morpheme.
    pub surface: String,

    /// The refinement state of this morpheme.
    pub kind: MorphKind,

    /// The position of the morpheme in the analyzed stream (0-based).
    pub position: usize,

    /// The byte offset where this morpheme starts in the analyzed text.
    pub start_offset: usize,

    /// The byte offset where this morpheme ends in the analyzed text.
    pub end_offset: usize,
}

impl Morpheme {
    /// Create a new analyzed morpheme with the given surface, tag, and position.
    pub fn new<S: Into<String>>(surface: S, tag: MorphTag, position: usize) -> Self {
        Morpheme {
            surface: surface.into(),
            kind: MorphKind::Analyzed(tag),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new analyzed morpheme with byte offsets into the analyzed text.
    pub fn with_offsets<S: Into<String>>(
        surface: S,
        tag: MorphTag,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Morpheme {
            surface: surface.into(),
            kind: MorphKind::Analyzed(tag),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Create a synthesized morpheme, the product of a combine rule.
    ///
    /// Synthesized morphemes are treated as already validated: the token
    /// validator accepts them without consulting its rule chain.
    pub fn synthesized<S: Into<String>>(surface: S, position: usize) -> Self {
        Morpheme {
            surface: surface.into(),
            kind: MorphKind::Synthesized,
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a suppressed placeholder at the given position.
    ///
    /// Suppressed morphemes are never emitted: the combiner skips them during
    /// its forward scan and the validator rejects them unconditionally.
    pub fn suppressed(position: usize) -> Self {
        Morpheme {
            surface: String::new(),
            kind: MorphKind::Suppressed,
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Set the byte span of this morpheme.
    pub fn with_span(mut self, start_offset: usize, end_offset: usize) -> Self {
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self
    }

    /// The analyzer tag, if this morpheme is in the `Analyzed` state.
    pub fn tag(&self) -> Option<MorphTag> {
        match self.kind {
            MorphKind::Analyzed(tag) => Some(tag),
            _ => None,
        }
    }

    /// Whether this morpheme was produced by the combiner.
    pub fn is_synthesized(&self) -> bool {
        self.kind == MorphKind::Synthesized
    }

    /// Whether this morpheme is a suppressed placeholder.
    pub fn is_suppressed(&self) -> bool {
        self.kind == MorphKind::Suppressed
    }

    /// The surface length in Unicode scalar values.
    ///
    /// Length rules in the validator count characters, not bytes; a Korean
    /// syllable counts as one.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }

    /// Check if the surface form is empty.
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface)
    }
}

/// The refinement state of a morpheme.
///
/// Replaces sentinel tag strings with an explicit state consumed by the
/// combiner and validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MorphKind {
    /// Produced by a morphological analyzer, carrying its part-of-speech tag.
    Analyzed(MorphTag),
    /// Produced by the combiner from a matched window; always valid downstream.
    Synthesized,
    /// Consumed by a combine window; never valid, skipped by the forward scan.
    Suppressed,
}

/// Part-of-speech tags of the mecab-ko-dic (Sejong) tag set.
///
/// Each variant corresponds to one POS code emitted by mecab-ko-dic-based
/// analyzers; [`MorphTag::from_pos`] and [`MorphTag::as_pos`] convert between
/// the two. Codes not in the inventory (and the analyzer's `UNK`) map to
/// [`MorphTag::Unknown`].
///
/// # Examples
///
/// ```
/// use malche::morpheme::MorphTag;
///
/// assert_eq!(MorphTag::from_pos("NNG"), MorphTag::CommonNoun);
/// assert_eq!(MorphTag::CommonNoun.as_pos(), "NNG");
/// // Inflected entries carry compound codes; the leading code decides.
/// assert_eq!(MorphTag::from_pos("VV+EC"), MorphTag::Verb);
/// assert_eq!(MorphTag::from_pos("???"), MorphTag::Unknown);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MorphTag {
    /// NNG: common noun.
    CommonNoun,
    /// NNP: proper noun.
    ProperNoun,
    /// NNB: dependent noun.
    DependentNoun,
    /// NNBC: counting-unit dependent noun.
    UnitNoun,
    /// NR: numeral.
    Numeral,
    /// NP: pronoun.
    Pronoun,
    /// VV: verb.
    Verb,
    /// VA: adjective.
    Adjective,
    /// VX: auxiliary predicate.
    AuxPredicate,
    /// VCP: positive copula (이다).
    PositiveCopula,
    /// VCN: negative copula (아니다).
    NegativeCopula,
    /// MM: determiner.
    Determiner,
    /// MAG: general adverb.
    Adverb,
    /// MAJ: conjunctive adverb.
    ConjunctiveAdverb,
    /// IC: interjection.
    Interjection,
    /// JKS: subject particle.
    SubjectParticle,
    /// JKC: complement particle.
    ComplementParticle,
    /// JKG: adnominal particle.
    AdnominalParticle,
    /// JKO: object particle.
    ObjectParticle,
    /// JKB: adverbial particle.
    AdverbialParticle,
    /// JKV: vocative particle.
    VocativeParticle,
    /// JKQ: quotative particle.
    QuotativeParticle,
    /// JX: auxiliary particle.
    AuxiliaryParticle,
    /// JC: conjunctive particle.
    ConjunctiveParticle,
    /// EP: pre-final ending.
    PrefinalEnding,
    /// EF: final ending.
    FinalEnding,
    /// EC: connective ending.
    ConnectiveEnding,
    /// ETN: nominalizing ending.
    NominalEnding,
    /// ETM: adnominal ending.
    AdnominalEnding,
    /// XPN: noun prefix.
    NounPrefix,
    /// XSN: noun-derived suffix.
    NounSuffix,
    /// XSV: verb-derived suffix.
    VerbSuffix,
    /// XSA: adjective-derived suffix.
    AdjectiveSuffix,
    /// XR: root.
    Root,
    /// SF: terminal punctuation (period, question mark, exclamation mark).
    TerminalPunct,
    /// SE: ellipsis.
    Ellipsis,
    /// SSO: opening bracket.
    OpenBracket,
    /// SSC: closing bracket.
    CloseBracket,
    /// SC: separator (comma, middle dot, slash).
    Separator,
    /// SY: other symbol.
    Symbol,
    /// SL: foreign word in Latin script.
    Foreign,
    /// SH: Chinese characters (hanja).
    Hanja,
    /// SN: number.
    Number,
    /// Anything outside the inventory, including the analyzer's `UNK`.
    Unknown,
}

impl MorphTag {
    /// Parse a mecab-ko-dic POS code.
    ///
    /// Compound codes from inflected dictionary entries (e.g. `VV+EC`) are
    /// resolved by their leading code. Unrecognized codes yield `Unknown`.
    pub fn from_pos(pos: &str) -> Self {
        let leading = pos.split('+').next().unwrap_or(pos);
        match leading {
            "NNG" => MorphTag::CommonNoun,
            "NNP" => MorphTag::ProperNoun,
            "NNB" => MorphTag::DependentNoun,
            "NNBC" => MorphTag::UnitNoun,
            "NR" => MorphTag::Numeral,
            "NP" => MorphTag::Pronoun,
            "VV" => MorphTag::Verb,
            "VA" => MorphTag::Adjective,
            "VX" => MorphTag::AuxPredicate,
            "VCP" => MorphTag::PositiveCopula,
            "VCN" => MorphTag::NegativeCopula,
            "MM" => MorphTag::Determiner,
            "MAG" => MorphTag::Adverb,
            "MAJ" => MorphTag::ConjunctiveAdverb,
            "IC" => MorphTag::Interjection,
            "JKS" => MorphTag::SubjectParticle,
            "JKC" => MorphTag::ComplementParticle,
            "JKG" => MorphTag::AdnominalParticle,
            "JKO" => MorphTag::ObjectParticle,
            "JKB" => MorphTag::AdverbialParticle,
            "JKV" => MorphTag::VocativeParticle,
            "JKQ" => MorphTag::QuotativeParticle,
            "JX" => MorphTag::AuxiliaryParticle,
            "JC" => MorphTag::ConjunctiveParticle,
            "EP" => MorphTag::PrefinalEnding,
            "EF" => MorphTag::FinalEnding,
            "EC" => MorphTag::ConnectiveEnding,
            "ETN" => MorphTag::NominalEnding,
            "ETM" => MorphTag::AdnominalEnding,
            "XPN" => MorphTag::NounPrefix,
            "XSN" => MorphTag::NounSuffix,
            "XSV" => MorphTag::VerbSuffix,
            "XSA" => MorphTag::AdjectiveSuffix,
            "XR" => MorphTag::Root,
            "SF" => MorphTag::TerminalPunct,
            "SE" => MorphTag::Ellipsis,
            "SSO" => MorphTag::OpenBracket,
            "SSC" => MorphTag::CloseBracket,
            "SC" => MorphTag::Separator,
            "SY" => MorphTag::Symbol,
            "SL" => MorphTag::Foreign,
            "SH" => MorphTag::Hanja,
            "SN" => MorphTag::Number,
            _ => MorphTag::Unknown,
        }
    }

    /// The mecab-ko-dic POS code for this tag.
    pub fn as_pos(&self) -> &'static str {
        match self {
            MorphTag::CommonNoun => "NNG",
            MorphTag::ProperNoun => "NNP",
            MorphTag::DependentNoun => "NNB",
            MorphTag::UnitNoun => "NNBC",
            MorphTag::Numeral => "NR",
            MorphTag::Pronoun => "NP",
            MorphTag::Verb => "VV",
            MorphTag::Adjective => "VA",
            MorphTag::AuxPredicate => "VX",
            MorphTag::PositiveCopula => "VCP",
            MorphTag::NegativeCopula => "VCN",
            MorphTag::Determiner => "MM",
            MorphTag::Adverb => "MAG",
            MorphTag::ConjunctiveAdverb => "MAJ",
            MorphTag::Interjection => "IC",
            MorphTag::SubjectParticle => "JKS",
            MorphTag::ComplementParticle => "JKC",
            MorphTag::AdnominalParticle => "JKG",
            MorphTag::ObjectParticle => "JKO",
            MorphTag::AdverbialParticle => "JKB",
            MorphTag::VocativeParticle => "JKV",
            MorphTag::QuotativeParticle => "JKQ",
            MorphTag::AuxiliaryParticle => "JX",
            MorphTag::ConjunctiveParticle => "JC",
            MorphTag::PrefinalEnding => "EP",
            MorphTag::FinalEnding => "EF",
            MorphTag::ConnectiveEnding => "EC",
            MorphTag::NominalEnding => "ETN",
            MorphTag::AdnominalEnding => "ETM",
            MorphTag::NounPrefix => "XPN",
            MorphTag::NounSuffix => "XSN",
            MorphTag::VerbSuffix => "XSV",
            MorphTag::AdjectiveSuffix => "XSA",
            MorphTag::Root => "XR",
            MorphTag::TerminalPunct => "SF",
            MorphTag::Ellipsis => "SE",
            MorphTag::OpenBracket => "SSO",
            MorphTag::CloseBracket => "SSC",
            MorphTag::Separator => "SC",
            MorphTag::Symbol => "SY",
            MorphTag::Foreign => "SL",
            MorphTag::Hanja => "SH",
            MorphTag::Number => "SN",
            MorphTag::Unknown => "UNK",
        }
    }
}

impl fmt::Display for MorphTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_pos())
    }
}

// Rule files carry tags as POS codes ("NNG"), not variant names.
impl Serialize for MorphTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_pos())
    }
}

impl<'de> Deserialize<'de> for MorphTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(MorphTag::from_pos(&code))
    }
}

/// A morpheme stream: the sequence produced by one analysis pass.
pub type MorphemeStream = Box<dyn Iterator<Item = Morpheme>>;

/// Trait for types that can produce a morpheme stream.
pub trait IntoMorphemeStream {
    /// Convert this type into a morpheme stream.
    fn into_morpheme_stream(self) -> MorphemeStream;
}

impl IntoMorphemeStream for Vec<Morpheme> {
    fn into_morpheme_stream(self) -> MorphemeStream {
        Box::new(self.into_iter())
    }
}
