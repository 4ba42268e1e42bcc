//! # ctpg-termgen - Keyword Terminal Generator for ctpg Grammars
//!
//! Generates C++ declarations for case-insensitive SQL keyword terminals to
//! be pasted into a [ctpg](https://github.com/peter-winter/ctpg) grammar
//! definition. For every keyword this produces a character-class pattern
//! constant and a `ctpg::regex_term` bound to it.
//!
//! The keyword list is fixed; the generator is run by hand whenever the
//! grammar's reserved words change and its output is pasted verbatim.

pub mod check;
pub mod emit;
pub mod pattern;

/// The reserved words of the grammar, in the order their terminals are
/// declared. Keywords must be unique lowercase alphabetic words; this is not
/// checked.
pub const KEYWORDS: [&str; 12] = [
    "select", "as", "from", "where", "count", "sum", "max", "min", "avg", "not", "and", "or",
];
