//! Implementation of the `cadence optimize` command.
//!
//! Moves a stored week's posts onto their platforms' preferred times and
//! saves the schedule again if anything moved.

use super::schedule::print_schedule;
use crate::cli::OptimizeArgs;
use crate::context::LibraryContext;
use crate::error::Result;
use crate::events::{Event, EventAction, log_event};
use crate::schedule::{load_weekly_schedule, optimize_schedule, save_weekly_schedule};
use serde_json::json;

/// Execute the `cadence optimize` command.
pub fn cmd_optimize(ctx: &LibraryContext, args: OptimizeArgs) -> Result<()> {
    ctx.ensure_initialized()?;
    let config = ctx.load_config()?;
    let mut schedule = load_weekly_schedule(ctx, args.week)?;

    let moved = optimize_schedule(&mut schedule, &config);
    if moved == 0 {
        println!(
            "All posts for the week of {} are already at preferred times.",
            args.week
        );
        return Ok(());
    }

    print_schedule(&schedule);
    save_weekly_schedule(ctx, &schedule)?;
    log_event(
        ctx,
        &Event::new(EventAction::Optimize)
            .with_week(args.week)
            .with_details(json!({ "moved": moved })),
    );

    println!("Moved {} post(s) to preferred times.", moved);
    Ok(())
}
