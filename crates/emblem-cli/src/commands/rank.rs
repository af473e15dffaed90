//! Rank command.

use crate::cli::RankArgs;
use crate::error::Result;
use crate::input::FileSource;
use crate::output::Formatter;
use emblem_catalog::Catalog;

/// Rank the symbols of an input file and print the ordered listing.
pub fn execute_rank(args: RankArgs, formatter: &Formatter) -> Result<()> {
    let catalog = Catalog::new(FileSource::load(&args.input)?);
    let ranked = catalog.ranked(args.limit);

    println!("{}", formatter.format_ranked(&ranked));
    Ok(())
}
