use anyhow::{Context, Result};
use clap::Args;
use stackdex_card::text;
use stackdex_catalog::{Catalog, FilterCriteria, StackKind, filter_records};
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive substring match over name and description
    #[arg(short, long, default_value = "")]
    search: String,

    /// Keep only stacks of this type (backend, frontend, ml, ...)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    kind: Option<StackKind>,

    /// Keep only stacks using this build tool (exact match)
    #[arg(long = "tool", value_name = "TOOL")]
    tool: Option<String>,
}

pub fn execute(args: ListArgs, catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let criteria = FilterCriteria {
        search: args.search,
        kind: args.kind,
        tool: args.tool,
    };
    let filtered = filter_records(&catalog.stacks, &criteria);

    print!("{}", text::render_listing(&filtered));
    Ok(())
}

pub fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::builtin().context("Embedded catalog is invalid"),
    }
}
