//! Implementation of the `cadence next-slot` command.

use crate::cli::NextSlotArgs;
use crate::context::LibraryContext;
use crate::error::Result;
use crate::schedule::{NEXT_SLOT_SEARCH_DAYS, next_available_slot};
use chrono::Local;

/// Execute the `cadence next-slot` command.
///
/// Finding no slot is not an error: some platforms have no preferred times.
pub fn cmd_next_slot(ctx: &LibraryContext, args: NextSlotArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let after = args.after.unwrap_or_else(|| Local::now().date_naive());

    match next_available_slot(&config, &args.platform, after) {
        Some(slot) => {
            println!(
                "Next {} slot: {} {} at {}",
                args.platform, slot.day_name, slot.date, slot.time
            );
        }
        None => {
            println!(
                "No preferred {} time in the {} days from {}.",
                args.platform, NEXT_SLOT_SEARCH_DAYS, after
            );
        }
    }

    Ok(())
}
