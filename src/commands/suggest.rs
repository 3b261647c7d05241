//! Implementation of the `cadence suggest` command.
//!
//! Reads a stored week, works out what the library already covers and which
//! observances are coming up, and proposes a topic for every empty slot.
//! Suggestions are saved as `topic_suggestions.json` in the week's folder.

use super::load_catalog;
use crate::calendar::find_relevant_observances;
use crate::cli::SuggestArgs;
use crate::config::{Config, ObservancePick};
use crate::context::LibraryContext;
use crate::coverage::analyze_coverage;
use crate::error::Result;
use crate::events::{Event, EventAction, log_event};
use crate::fs::atomic_write_json;
use crate::library::get_existing_topics;
use crate::planner::{
    FirstEligible, IdeaPicker, RandomPicker, SourceType, TopicAssignment, suggest_topics,
};
use crate::schedule::{
    apply_assignments, get_week_slots, load_weekly_schedule, save_weekly_schedule,
};
use serde_json::json;
use tracing::info;

/// Execute the `cadence suggest` command.
pub fn cmd_suggest(ctx: &LibraryContext, args: SuggestArgs) -> Result<()> {
    ctx.ensure_initialized()?;
    let config = ctx.load_config()?;
    let week = args.week;

    let mut schedule = load_weekly_schedule(ctx, week)?;
    let slots = get_week_slots(&schedule);

    let existing = get_existing_topics(&ctx.root, &config.meta_glob)?;
    let areas = config.service_area_catalog();
    let coverage = analyze_coverage(&areas, &existing);

    let catalog = load_catalog(ctx, &config, args.observances.as_ref())?;
    let (first_day, last_day) = schedule.date_span();
    let observances =
        find_relevant_observances(&catalog, first_day, last_day, config.lead_time_days);
    info!(
        slots = slots.len(),
        existing = existing.len(),
        catalog = catalog.len(),
        observances = observances.len(),
        "planning topics"
    );

    let mut picker = idea_picker(&config, &args);
    let assignments = suggest_topics(
        &slots,
        &existing,
        &coverage,
        &observances,
        &areas,
        picker.as_mut(),
    );

    let suggestions_path = ctx.suggestions_path(week);
    atomic_write_json(&suggestions_path, &assignments)?;

    print_suggestions(&assignments, slots.len());
    println!();
    println!("Suggestions saved to {}", suggestions_path.display());

    let observance_topics = assignments
        .iter()
        .filter(|a| a.source_type == SourceType::Observance)
        .count();
    log_event(
        ctx,
        &Event::new(EventAction::Suggest)
            .with_week(week)
            .with_details(json!({
                "slots": slots.len(),
                "assigned": assignments.len(),
                "observance_topics": observance_topics,
            })),
    );

    if args.apply {
        let applied = apply_assignments(&mut schedule, &assignments);
        let path = save_weekly_schedule(ctx, &schedule)?;
        log_event(
            ctx,
            &Event::new(EventAction::Apply)
                .with_week(week)
                .with_details(json!({ "applied": applied })),
        );
        println!("Applied {} topic(s) to {}", applied, path.display());
    }

    Ok(())
}

/// Choose how observance ideas are picked.
///
/// `--first` wins, then an explicit seed, then the configured default.
fn idea_picker(config: &Config, args: &SuggestArgs) -> Box<dyn IdeaPicker> {
    if args.first {
        return Box::new(FirstEligible);
    }
    if let Some(seed) = args.seed {
        return Box::new(RandomPicker::seeded(seed));
    }
    match config.observance_pick {
        ObservancePick::First => Box::new(FirstEligible),
        ObservancePick::Random => Box::new(RandomPicker::from_entropy()),
    }
}

fn print_suggestions(assignments: &[TopicAssignment], slot_count: usize) {
    if slot_count == 0 {
        println!("No empty slots this week.");
        return;
    }

    println!(
        "{:<10} {:<10} {:<5}  {:<10} {:<40} SOURCE",
        "DATE", "PLATFORM", "TIME", "PRIORITY", "TOPIC"
    );
    for a in assignments {
        println!(
            "{:<10} {:<10} {:<5}  {:<10} {:<40} {}",
            a.date, a.platform, a.time, a.priority, a.topic, a.service_area_or_observance
        );
    }

    let unfilled = slot_count.saturating_sub(assignments.len());
    if unfilled > 0 {
        println!();
        println!("{} slot(s) left without a fresh topic.", unfilled);
    }
}
