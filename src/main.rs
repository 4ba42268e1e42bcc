//! # `ctpg-termgen`
//!
//! Prints the case-insensitive keyword terminal declarations for the SQL
//! grammar. The output is pasted verbatim into the grammar definition; run
//! with `--check` to verify a pasted copy is still up to date.

use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use ctpg_termgen::{check, emit, KEYWORDS};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The output path. Writes to `stdout` if not given.
    out_path: Option<PathBuf>,
    /// Do not write; fail if the file at the output path differs from the
    /// generated declarations
    #[arg(long, requires = "out_path")]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let document = emit::document(KEYWORDS).context("error rendering the declarations")?;
    match args.out_path {
        Some(path) if args.check => {
            if check::diff(&path, &document) {
                std::process::exit(1);
            }
        }
        Some(path) => std::fs::write(&path, &document)
            .with_context(|| format!("error writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(document.as_bytes())
            .context("error writing the output")?,
    }
    Ok(())
}
