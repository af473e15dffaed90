//! Stats command.

use crate::cli::StatsArgs;
use crate::error::Result;
use crate::input::FileSource;
use crate::output::Formatter;
use emblem_catalog::{Catalog, DEFAULT_LIMIT};

/// Print aggregate completeness statistics over an input file.
pub fn execute_stats(args: StatsArgs, formatter: &Formatter) -> Result<()> {
    let catalog = Catalog::new(FileSource::load(&args.input)?);
    let stats = catalog.stats(DEFAULT_LIMIT);

    println!("{}", formatter.format_stats(&stats));
    Ok(())
}
