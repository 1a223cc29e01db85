use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use stackdex_card::{Card, html, text};
use std::path::PathBuf;

use crate::list::load_catalog;

#[derive(Args)]
pub struct ShowArgs {
    /// Record id (see `stackdex list`)
    id: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

pub fn execute(args: ShowArgs, catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let Some(record) = catalog.get(&args.id) else {
        let known: Vec<&str> = catalog.stacks.iter().map(|s| s.id.as_str()).collect();
        bail!("no stack with id '{}' (known ids: {})", args.id, known.join(", "));
    };

    let card = Card::from_record(record);
    match args.format {
        Format::Text => print!("{}", text::render_card(&card)),
        Format::Html => print!("{}", html::render_card(&card)),
    }
    Ok(())
}
