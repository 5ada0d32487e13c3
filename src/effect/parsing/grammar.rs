//! The Effect grammar as data
//!
//!     The whole language is described by the static tables in this module; the parser in
//!     [super::parser] is a small engine that walks them. Adding a statement means adding a
//!     table row, not parser code.
//!
//!     A [Block] is a keyword, optional header arguments, and a braced body of entries. An
//!     [Entry] is either a nested block or a statement: a keyword followed by positional
//!     arguments described by [Arg]s.
//!
//!     The grammar is LL(1). Every decision is made on the next token alone:
//!
//!         Block body:  the entry whose keyword is the next token, or '}'.
//!         OneOf:       the alternative whose FIRST set holds the next token.
//!         Repeat:      another item if the next token is ',' or in the item's FIRST set.
//!
//!     The tests at the bottom of this file check the tables keep those decisions
//!     unambiguous.
//!
//!     Choice positions borrow their keywords from the resolver's
//!     [mapping](crate::effect::resolving::mapping) tables, so a keyword is accepted exactly
//!     when it has a value to resolve to.

use crate::effect::resolving::mapping;
use crate::effect::token::{Keyword, TokenClass};
use std::fmt;

/// The keywords accepted at one choice position
pub trait KeywordSet: fmt::Debug + Sync {
    fn keywords(&self) -> Vec<Keyword>;

    fn contains(&self, keyword: Keyword) -> bool {
        self.keywords().contains(&keyword)
    }
}

impl<T: fmt::Debug + Sync> KeywordSet for &'static [(Keyword, T)] {
    fn keywords(&self) -> Vec<Keyword> {
        self.iter().map(|(keyword, _)| *keyword).collect()
    }
}

/// Bare markers with no table behind them
impl KeywordSet for &'static [Keyword] {
    fn keywords(&self) -> Vec<Keyword> {
        self.to_vec()
    }
}

/// Union of several sets
impl KeywordSet for &'static [&'static dyn KeywordSet] {
    fn keywords(&self) -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = Vec::new();
        for set in self.iter() {
            for keyword in set.keywords() {
                if !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }
        }
        keywords
    }
}

/// The shape of one positional argument
#[derive(Debug)]
pub enum Arg {
    /// `enabled` or `disabled`, appended as a BOOLEAN leaf
    Bool,
    /// A number appended as a FLOATVALUE leaf
    Float,
    /// A number appended as a UINTVALUE leaf
    UInt,
    /// A string literal appended as a STRINGLITERAL leaf
    Str,
    /// One of a fixed set of keywords, appended as a marker leaf
    Choice(&'static dyn KeywordSet),
    /// Between `min` and `max` items, optionally separated by commas
    Repeat {
        item: &'static Arg,
        min: usize,
        max: usize,
    },
    /// Exactly one of several argument sequences, picked by the next token
    OneOf(&'static [&'static [Arg]]),
}

impl Arg {
    /// The token classes that can start this argument
    pub fn first(&self) -> Vec<TokenClass> {
        match self {
            Arg::Bool => vec![
                TokenClass::Keyword(Keyword::Enabled),
                TokenClass::Keyword(Keyword::Disabled),
            ],
            Arg::Float | Arg::UInt => vec![TokenClass::Number],
            Arg::Str => vec![TokenClass::String],
            Arg::Choice(set) => set.keywords().into_iter().map(TokenClass::Keyword).collect(),
            Arg::Repeat { item, .. } => item.first(),
            Arg::OneOf(alternatives) => alternatives
                .iter()
                .filter_map(|sequence| sequence.first())
                .flat_map(Arg::first)
                .collect(),
        }
    }

    pub fn starts_with(&self, class: TokenClass) -> bool {
        self.first().contains(&class)
    }
}

#[derive(Debug)]
pub enum Entry {
    Statement {
        keyword: Keyword,
        args: &'static [Arg],
    },
    Block(&'static Block),
}

impl Entry {
    pub fn keyword(&self) -> Keyword {
        match self {
            Entry::Statement { keyword, .. } => *keyword,
            Entry::Block(block) => block.keyword,
        }
    }
}

const fn statement(keyword: Keyword, args: &'static [Arg]) -> Entry {
    Entry::Statement { keyword, args }
}

#[derive(Debug)]
pub struct Block {
    pub keyword: Keyword,
    /// Arguments between the keyword and the opening brace
    pub header: &'static [Arg],
    /// Entries accepted only before the first body entry
    pub preamble: &'static [Entry],
    pub body: &'static [Entry],
    /// An entry that must appear at least once
    pub required: Option<Keyword>,
}

impl Block {
    /// The entry opened by `keyword`, if it is acceptable at this point of the body
    pub fn entry(&self, keyword: Keyword, in_preamble: bool) -> Option<&'static Entry> {
        self.entries(in_preamble)
            .find(|entry| entry.keyword() == keyword)
    }

    pub fn entries(&self, in_preamble: bool) -> impl Iterator<Item = &'static Entry> {
        let preamble: &'static [Entry] = if in_preamble { self.preamble } else { &[] };
        preamble.iter().chain(self.body.iter())
    }

    pub fn is_preamble(&self, keyword: Keyword) -> bool {
        self.preamble.iter().any(|entry| entry.keyword() == keyword)
    }
}

// Choice sets without a one-to-one mapping table

const VERTEX_COLOUR: &[Keyword] = &[Keyword::VertexColour];

/// Filtering accepts presets and filter kinds; the resolver sorts out which shape was used
pub const FILTER_OPTIONS: &[&dyn KeywordSet] =
    &[&mapping::FILTER_PRESETS, &mapping::TEXTURE_FILTERS];

// Argument shapes

const BOOL: &[Arg] = &[Arg::Bool];
const FLOAT: &[Arg] = &[Arg::Float];
const UINT: &[Arg] = &[Arg::UInt];

const COLOUR: Arg = Arg::Repeat {
    item: &Arg::Float,
    min: 3,
    max: 4,
};

const VECTOR: Arg = Arg::Repeat {
    item: &Arg::Float,
    min: 2,
    max: 3,
};

const MATERIAL_COLOUR: &[Arg] = &[Arg::OneOf(&[
    &[Arg::Choice(&VERTEX_COLOUR)],
    &[COLOUR],
])];

const SCENE_BLEND: &[Arg] = &[Arg::OneOf(&[
    &[Arg::Choice(&mapping::BLEND_PRESETS)],
    &[Arg::Choice(&mapping::BLEND_FACTORS), Arg::Choice(&mapping::BLEND_FACTORS)],
])];

const ALPHA_TEST: &[Arg] = &[Arg::OneOf(&[
    &[Arg::Bool],
    &[Arg::Choice(&mapping::COMPARE_FUNCS), Arg::Float],
])];

const STENCIL_TEST: &[Arg] = &[Arg::OneOf(&[
    &[Arg::Bool],
    &[Arg::Choice(&mapping::COMPARE_FUNCS), Arg::UInt],
])];

const COMBINE: &[Arg] = &[
    Arg::Choice(&mapping::TEXTURE_OPS),
    Arg::Choice(&mapping::TEXTURE_ARGS),
    Arg::Choice(&mapping::TEXTURE_ARGS),
];

const FILTERING: &[Arg] = &[Arg::Repeat {
    item: &Arg::Choice(&FILTER_OPTIONS),
    min: 1,
    max: 3,
}];

// Blocks, innermost first

pub static WAVE_XFORM: Block = Block {
    keyword: Keyword::WaveXform,
    header: &[],
    preamble: &[],
    body: &[
        statement(Keyword::XformType, &[Arg::Choice(&mapping::XFORM_TYPES)]),
        statement(Keyword::WaveType, &[Arg::Choice(&mapping::WAVE_TYPES)]),
        statement(Keyword::Base, FLOAT),
        statement(Keyword::Frequency, FLOAT),
        statement(Keyword::Phase, FLOAT),
        statement(Keyword::Amplitude, FLOAT),
    ],
    required: None,
};

pub static TEXTURE_UNIT: Block = Block {
    keyword: Keyword::TextureUnit,
    header: &[],
    preamble: &[],
    body: &[
        statement(Keyword::Texture, &[Arg::Choice(&mapping::TEXTURE_TYPES), Arg::Str]),
        statement(Keyword::AutoGenerated, BOOL),
        statement(Keyword::TexCoordSet, UINT),
        statement(
            Keyword::AddressingMode,
            &[Arg::Choice(&mapping::ADDRESS_AXES), Arg::Choice(&mapping::ADDRESSING_MODES)],
        ),
        statement(Keyword::Filtering, FILTERING),
        statement(Keyword::MaxAnisotropy, UINT),
        statement(Keyword::ColourOp, COMBINE),
        statement(Keyword::AlphaOp, COMBINE),
        statement(Keyword::ConstantColour, &[COLOUR]),
        statement(Keyword::TexCoordGen, &[Arg::Choice(&mapping::TEXGENS)]),
        statement(Keyword::Scroll, &[VECTOR]),
        statement(Keyword::Scale, &[VECTOR]),
        statement(Keyword::Rotate, FLOAT),
        statement(Keyword::ScrollAnim, &[VECTOR]),
        statement(Keyword::ScaleAnim, &[VECTOR]),
        statement(Keyword::RotateAnim, FLOAT),
        Entry::Block(&WAVE_XFORM),
    ],
    required: None,
};

pub static PASS: Block = Block {
    keyword: Keyword::Pass,
    header: &[],
    preamble: &[],
    body: &[
        statement(Keyword::Ambient, MATERIAL_COLOUR),
        statement(Keyword::Diffuse, MATERIAL_COLOUR),
        statement(Keyword::Specular, MATERIAL_COLOUR),
        statement(Keyword::Emissive, MATERIAL_COLOUR),
        statement(Keyword::Shininess, FLOAT),
        statement(Keyword::SceneBlend, SCENE_BLEND),
        statement(Keyword::AlphaTest, ALPHA_TEST),
        statement(Keyword::DepthTest, BOOL),
        statement(Keyword::DepthFunc, &[Arg::Choice(&mapping::COMPARE_FUNCS)]),
        statement(Keyword::DepthBias, FLOAT),
        statement(Keyword::DepthWrite, BOOL),
        statement(Keyword::StencilTest, STENCIL_TEST),
        statement(Keyword::StencilMask, UINT),
        statement(Keyword::StencilWriteMask, UINT),
        statement(Keyword::StencilPass, &[Arg::Choice(&mapping::STENCIL_OPS)]),
        statement(Keyword::StencilFail, &[Arg::Choice(&mapping::STENCIL_OPS)]),
        statement(Keyword::StencilZFail, &[Arg::Choice(&mapping::STENCIL_OPS)]),
        statement(Keyword::CullingMode, &[Arg::Choice(&mapping::CULL_MODES)]),
        statement(Keyword::NormaliseNormals, BOOL),
        statement(Keyword::Lighting, BOOL),
        statement(Keyword::Shading, &[Arg::Choice(&mapping::SHADE_MODES)]),
        statement(Keyword::ColourWrite, BOOL),
        statement(Keyword::MaxLights, UINT),
        statement(
            Keyword::Iteration,
            &[Arg::Choice(&mapping::ITERATION_MODES), Arg::Choice(&mapping::LIGHT_TYPES)],
        ),
        statement(Keyword::FogOverride, BOOL),
        statement(Keyword::FogType, &[Arg::Choice(&mapping::FOG_MODES)]),
        statement(Keyword::FogDensity, FLOAT),
        statement(Keyword::FogStart, FLOAT),
        statement(Keyword::FogEnd, FLOAT),
        statement(Keyword::FogColour, &[COLOUR]),
        statement(Keyword::Sort, &[Arg::Choice(&mapping::SORT_GROUPS)]),
        Entry::Block(&TEXTURE_UNIT),
    ],
    required: None,
};

pub static TECHNIQUE: Block = Block {
    keyword: Keyword::Technique,
    header: &[],
    preamble: &[],
    body: &[
        statement(Keyword::LodLevel, UINT),
        statement(Keyword::Sort, &[Arg::Choice(&mapping::SORT_GROUPS)]),
        statement(Keyword::ReceiveShadows, BOOL),
        statement(Keyword::CastShadows, BOOL),
        Entry::Block(&PASS),
    ],
    required: Some(Keyword::Pass),
};

/// The root block: `effect "name" { ... }`
pub static EFFECT: Block = Block {
    keyword: Keyword::Effect,
    header: &[Arg::Str],
    preamble: &[
        statement(Keyword::ReceiveShadows, BOOL),
        statement(Keyword::CastShadows, BOOL),
    ],
    body: &[Entry::Block(&TECHNIQUE)],
    required: Some(Keyword::Technique),
};

/// Every block of the grammar, root first
pub fn blocks() -> [&'static Block; 5] {
    [&EFFECT, &TECHNIQUE, &PASS, &TEXTURE_UNIT, &WAVE_XFORM]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn statements(block: &Block) -> impl Iterator<Item = (Keyword, &'static [Arg])> + '_ {
        block.entries(true).filter_map(|entry| match entry {
            Entry::Statement { keyword, args } => Some((*keyword, *args)),
            Entry::Block(_) => None,
        })
    }

    fn all_args(args: &'static [Arg], out: &mut Vec<&'static Arg>) {
        for arg in args {
            out.push(arg);
            match arg {
                Arg::Repeat { item, .. } => out.push(*item),
                Arg::OneOf(alternatives) => {
                    for sequence in alternatives.iter() {
                        all_args(*sequence, out);
                    }
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_entry_keywords_are_unique_per_block() {
        for block in blocks() {
            let mut seen = HashSet::new();
            for entry in block.entries(true) {
                assert!(
                    seen.insert(entry.keyword()),
                    "{} is declared twice in {}",
                    entry.keyword(),
                    block.keyword
                );
            }
        }
    }

    #[test]
    fn test_one_of_alternatives_are_disjoint() {
        for block in blocks() {
            for (keyword, args) in statements(block) {
                let mut nested = Vec::new();
                all_args(args, &mut nested);
                for arg in nested {
                    let Arg::OneOf(alternatives) = arg else {
                        continue;
                    };
                    let mut seen = HashSet::new();
                    for sequence in alternatives.iter() {
                        let first = sequence.first().expect("alternatives are never empty");
                        for class in first.first() {
                            assert!(
                                seen.insert(class),
                                "{} is ambiguous in the arguments of {}",
                                class,
                                keyword
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_repeats_cannot_swallow_the_next_statement() {
        for block in blocks() {
            let openers: HashSet<_> = block
                .entries(true)
                .map(|entry| TokenClass::Keyword(entry.keyword()))
                .collect();
            for (keyword, args) in statements(block) {
                let mut nested = Vec::new();
                all_args(args, &mut nested);
                for arg in nested {
                    if let Arg::Repeat { item, min, max } = arg {
                        assert!(*min >= 1 && min <= max, "bad bounds in {}", keyword);
                        for class in item.first() {
                            assert!(
                                !openers.contains(&class),
                                "{} can both continue {} and open a statement",
                                class,
                                keyword
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_required_entries_exist() {
        for block in blocks() {
            if let Some(required) = block.required {
                assert!(block.entry(required, false).is_some());
            }
        }
    }

    #[test]
    fn test_preamble_only_before_body() {
        assert!(EFFECT.entry(Keyword::ReceiveShadows, true).is_some());
        assert!(EFFECT.entry(Keyword::ReceiveShadows, false).is_none());
        assert!(EFFECT.is_preamble(Keyword::CastShadows));
        assert!(EFFECT.entry(Keyword::Technique, false).is_some());
    }

    #[test]
    fn test_first_sets() {
        assert_eq!(COLOUR.first(), vec![TokenClass::Number]);
        assert!(MATERIAL_COLOUR[0].starts_with(TokenClass::Keyword(Keyword::VertexColour)));
        assert!(MATERIAL_COLOUR[0].starts_with(TokenClass::Number));
        assert!(!MATERIAL_COLOUR[0].starts_with(TokenClass::String));
    }
}
