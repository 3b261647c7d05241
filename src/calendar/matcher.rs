//! Selection of observances relevant to a planning window.

use super::{ObservanceCatalog, ResolvedObservance};
use chrono::{Datelike, Days, NaiveDate};

/// Find observances that overlap `[window_start, window_end + lead_time_days]`.
///
/// Every definition is resolved in the calendar year of `window_start`;
/// definitions with unparseable dates are skipped. The result is sorted by
/// optimal post date, keeping catalog order for ties.
pub fn find_relevant_observances(
    catalog: &ObservanceCatalog,
    window_start: NaiveDate,
    window_end: NaiveDate,
    lead_time_days: u32,
) -> Vec<ResolvedObservance> {
    let year = window_start.year();
    let forecast_end = window_end
        .checked_add_days(Days::new(u64::from(lead_time_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut relevant: Vec<ResolvedObservance> = catalog
        .definitions()
        .filter_map(|def| {
            let resolved = def.resolve(year);
            if resolved.is_none() {
                tracing::debug!(
                    name = %def.name,
                    dates = %def.dates,
                    "unparseable observance date, skipping"
                );
            }
            resolved
        })
        .filter(|obs| obs.start <= forecast_end && obs.end >= window_start)
        .collect();

    relevant.sort_by_key(|obs| obs.optimal_post_date);
    relevant
}
