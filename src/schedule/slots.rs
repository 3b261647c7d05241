//! Open posting slots and topic write-back.

use super::{PostStatus, WeeklySchedule};
use crate::planner::{PostingSlot, TopicAssignment};

/// Posts of the week that still need a topic, in date then stored order.
///
/// A post is open when it has neither a content file nor a topic.
pub fn get_week_slots(schedule: &WeeklySchedule) -> Vec<PostingSlot> {
    schedule
        .days
        .values()
        .flat_map(|day| {
            day.posts
                .iter()
                .enumerate()
                .filter(|(_, post)| post.is_open())
                .map(move |(post_index, post)| PostingSlot {
                    date: day.date,
                    day_name: day.day_name.clone(),
                    platform: post.platform.clone(),
                    time: post.time.clone(),
                    post_index,
                })
        })
        .collect()
}

/// Record assigned topics on their posts.
///
/// Each assignment is matched to its post by date and `post_index`. Posts
/// that no longer exist, belong to another platform or are no longer open are
/// left untouched. Returns the number of posts updated.
pub fn apply_assignments(schedule: &mut WeeklySchedule, assignments: &[TopicAssignment]) -> usize {
    let mut applied = 0;

    for assignment in assignments {
        let post = schedule
            .days
            .get_mut(&assignment.date)
            .and_then(|day| day.posts.get_mut(assignment.post_index))
            .filter(|post| post.platform.eq_ignore_ascii_case(&assignment.platform))
            .filter(|post| post.is_open());

        let Some(post) = post else {
            tracing::debug!(
                date = %assignment.date,
                post_index = assignment.post_index,
                "assignment no longer matches an open post"
            );
            continue;
        };

        post.topic = Some(assignment.topic.clone());
        post.status = PostStatus::TopicAssigned;
        applied += 1;
    }

    applied
}
