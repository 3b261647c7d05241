//! Slot-by-slot topic selection.

use super::{
    DEFAULT_FOCUS_AREA, IdeaPicker, PostingSlot, SlotPriority, SourceType, TopicAssignment,
};
use crate::calendar::ResolvedObservance;
use crate::coverage::{CoverageReport, Priority, ServiceArea};
use std::collections::{BTreeSet, HashSet};

/// How many slots observances may fill: at most half the week (at least one),
/// and never more than there are observances.
pub fn max_observance_slots(observance_count: usize, slot_count: usize) -> usize {
    observance_count.min((slot_count / 2).max(1))
}

/// Service area state for one planning run.
struct WorkingArea<'a> {
    area: &'a ServiceArea,
    count: usize,
    priority: Priority,
}

/// Topics and observances consumed so far in one run.
struct Run<'a> {
    existing: &'a BTreeSet<String>,
    used_topics: HashSet<String>,
    used_observances: HashSet<&'a str>,
    areas: Vec<WorkingArea<'a>>,
}

/// Assign topics to the given slots.
///
/// Slots are processed in order. Each slot first tries an unused observance
/// (while fewer than [`max_observance_slots`] have been filled), then falls
/// back to the highest-priority, least-covered service area. Slots for which
/// nothing is left are omitted from the result.
///
/// No topic is assigned twice, and no topic whose lowercase form is in
/// `existing_topics` is assigned. `coverage` is not modified; areas missing
/// from it are treated as `low` priority with zero coverage.
pub fn suggest_topics(
    slots: &[PostingSlot],
    existing_topics: &BTreeSet<String>,
    coverage: &CoverageReport,
    observances: &[ResolvedObservance],
    service_areas: &[ServiceArea],
    picker: &mut dyn IdeaPicker,
) -> Vec<TopicAssignment> {
    let observance_budget = max_observance_slots(observances.len(), slots.len());
    let mut observance_slots_used = 0;

    let mut run = Run {
        existing: existing_topics,
        used_topics: HashSet::new(),
        used_observances: HashSet::new(),
        areas: service_areas
            .iter()
            .map(|area| {
                let record = coverage.get(&area.name).copied().unwrap_or_default();
                WorkingArea {
                    area,
                    count: record.count,
                    priority: record.priority,
                }
            })
            .collect(),
    };

    let mut assignments = Vec::with_capacity(slots.len());

    for slot in slots {
        if observance_slots_used < observance_budget
            && let Some(assignment) = run.observance_topic(slot, observances, picker)
        {
            observance_slots_used += 1;
            assignments.push(assignment);
            continue;
        }

        match run.service_area_topic(slot) {
            Some(assignment) => assignments.push(assignment),
            None => {
                tracing::debug!(
                    date = %slot.date,
                    platform = %slot.platform,
                    "no topic left for slot"
                );
            }
        }
    }

    assignments
}

fn is_available(existing: &BTreeSet<String>, used: &HashSet<String>, topic: &str) -> bool {
    let key = topic.to_lowercase();
    !existing.contains(&key) && !used.contains(&key)
}

impl<'a> Run<'a> {
    fn observance_topic(
        &mut self,
        slot: &PostingSlot,
        observances: &'a [ResolvedObservance],
        picker: &mut dyn IdeaPicker,
    ) -> Option<TopicAssignment> {
        for obs in observances {
            if self.used_observances.contains(obs.name.as_str()) {
                continue;
            }

            let eligible: Vec<&str> = obs
                .content_ideas
                .iter()
                .map(String::as_str)
                .filter(|idea| is_available(self.existing, &self.used_topics, idea))
                .collect();

            let Some(topic) = picker.pick(&eligible).filter(|t| eligible.contains(t)) else {
                continue;
            };

            self.used_topics.insert(topic.to_lowercase());
            self.used_observances.insert(obs.name.as_str());

            let mut assignment = TopicAssignment::for_slot(
                slot,
                topic.to_string(),
                obs.name.clone(),
                SlotPriority::Observance,
                SourceType::Observance,
            );
            assignment.focus_area = Some(
                obs.focus_areas
                    .first()
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_FOCUS_AREA.to_string()),
            );
            return Some(assignment);
        }

        None
    }

    fn service_area_topic(&mut self, slot: &PostingSlot) -> Option<TopicAssignment> {
        let mut ranked: Vec<usize> = (0..self.areas.len()).collect();
        ranked.sort_by_key(|&i| (self.areas[i].priority.rank(), self.areas[i].count));

        for i in ranked {
            let area = self.areas[i].area;
            let Some(topic) = area
                .topics
                .iter()
                .find(|t| is_available(self.existing, &self.used_topics, t))
            else {
                continue;
            };

            self.used_topics.insert(topic.to_lowercase());
            self.areas[i].count += 1;

            return Some(TopicAssignment::for_slot(
                slot,
                topic.clone(),
                area.name.clone(),
                self.areas[i].priority.into(),
                SourceType::ServiceArea,
            ));
        }

        None
    }
}
