//! # Rendering Terminal Declarations
//!
//! Every keyword yields a pattern constant and a `ctpg::regex_term` bound to
//! it, rendered through the declaration template. The full document starts
//! with the comma-joined list of term names, for pasting into the grammar's
//! terminal list.

use itertools::Itertools;
use minijinja::{context, Environment};

use crate::pattern;

/// Errors occurring while rendering declarations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The declaration template failed to load or render
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

const TERM_TEMPLATE: &str = include_str!("../templates/term.cpp.j2");

/// Template context for one keyword terminal
#[derive(serde::Serialize)]
struct Term<'a> {
    name: &'a str,
    pattern: String,
    symbol: String,
}

impl<'a> Term<'a> {
    fn new(keyword: &'a str) -> Self {
        Term {
            name: keyword,
            pattern: pattern::case_insensitive(keyword),
            symbol: format!("{keyword}_kw"),
        }
    }
}

fn template_env() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("term.cpp.j2", TERM_TEMPLATE)?;
    Ok(env)
}

/// Renders the two declaration lines for a single keyword
///
/// The block has no leading blank line and no trailing newline; the document
/// renderer adds both.
pub fn declaration(keyword: &str) -> Result<String, Error> {
    let env = template_env()?;
    let tmpl = env.get_template("term.cpp.j2")?;
    Ok(tmpl.render(context!(term => Term::new(keyword)))?)
}

/// Renders the complete declaration document for a keyword sequence
///
/// The first line is the comma-joined list of term names; each keyword then
/// contributes a blank line followed by its two declaration lines. Output
/// order follows input order.
pub fn document<'k, I>(keywords: I) -> Result<String, Error>
where
    I: IntoIterator<Item = &'k str>,
{
    let terms: Vec<_> = keywords.into_iter().map(Term::new).collect();
    let env = template_env()?;
    let tmpl = env.get_template("term.cpp.j2")?;
    let mut doc = terms.iter().map(|term| term.symbol.as_str()).join(", ");
    doc.push('\n');
    for term in &terms {
        doc.push('\n');
        doc.push_str(&tmpl.render(context!(term => term))?);
        doc.push('\n');
    }
    Ok(doc)
}
