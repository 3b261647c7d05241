//! Implementation of the `cadence observances` command.
//!
//! Lists the observances relevant to a date window, in posting order.

use super::{load_catalog, week_end};
use crate::calendar::{ResolvedObservance, find_relevant_observances};
use crate::cli::ObservancesArgs;
use crate::config::Config;
use crate::context::LibraryContext;
use crate::error::{CadenceError, Result};

/// Execute the `cadence observances` command.
pub fn cmd_observances(ctx: &LibraryContext, args: ObservancesArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let found = relevant_observances(ctx, &config, &args)?;

    let to = args.to.unwrap_or_else(|| week_end(args.from));
    let lead = args.lead_days.unwrap_or(config.lead_time_days);

    println!(
        "Observances for {} to {} (+{} days lead time):",
        args.from, to, lead
    );
    println!();

    if found.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for obs in &found {
        println!("  {} [{}]", obs.name, obs.kind);
        println!("    Dates:     {}", obs.date_label());
        println!("    Post by:   {}", obs.optimal_post_date);
        if !obs.focus_areas.is_empty() {
            println!("    Focus:     {}", obs.focus_areas.join(", "));
        }
        if !obs.content_ideas.is_empty() {
            println!("    Ideas:     {}", obs.content_ideas.join("; "));
        }
    }

    Ok(())
}

/// Observances for the command's window, resolved against the configuration.
fn relevant_observances(
    ctx: &LibraryContext,
    config: &Config,
    args: &ObservancesArgs,
) -> Result<Vec<ResolvedObservance>> {
    let to = args.to.unwrap_or_else(|| week_end(args.from));
    if to < args.from {
        return Err(CadenceError::UserError(format!(
            "--to ({}) must not be before --from ({})",
            to, args.from
        )));
    }

    let catalog = load_catalog(ctx, config, args.observances.as_ref())?;
    let lead = args.lead_days.unwrap_or(config.lead_time_days);
    Ok(find_relevant_observances(&catalog, args.from, to, lead))
}
