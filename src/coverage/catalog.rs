//! Built-in service-area catalog.
//!
//! Order matters: it is the tie-break order when two areas have the same
//! priority and coverage count.

use super::ServiceArea;

fn area(name: &str, keywords: &[&str], topics: &[&str]) -> ServiceArea {
    ServiceArea {
        name: name.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        topics: topics.iter().map(|s| s.to_string()).collect(),
    }
}

/// The default service areas of the practice, in catalog order.
pub fn default_service_areas() -> Vec<ServiceArea> {
    vec![
        area(
            "anxiety",
            &["anxiety", "panic", "worry", "stress", "overwhelm"],
            &[
                "Anxiety Coping Strategies for Adults",
                "Understanding Panic Attacks and How to Manage Them",
                "Daily Anxiety Management Techniques",
                "Social Anxiety: Signs and Support",
                "Anxiety vs Stress: Understanding the Difference",
                "Grounding Techniques for Anxiety Relief",
                "How Therapy Helps with Chronic Anxiety",
            ],
        ),
        area(
            "adhd",
            &["adhd", "attention", "focus", "executive function"],
            &[
                "Understanding ADHD in Adults",
                "ADHD and Relationship Challenges",
                "Executive Function Skills for ADHD",
                "ADHD Diagnosis Process for Adults",
                "ADHD Medication vs Therapy: What Works Best",
                "Time Management Strategies for ADHD",
            ],
        ),
        area(
            "depression",
            &["depression", "depressed", "sadness", "hopeless"],
            &[
                "Recognizing Depression Symptoms in Adults",
                "When Sadness Becomes Depression",
                "Depression Treatment Options That Work",
                "Supporting a Loved One with Depression",
                "Seasonal Depression: More Than Just Winter Blues",
            ],
        ),
        area(
            "couples",
            &["couples", "relationship", "marriage", "partner"],
            &[
                "Signs You Need Couples Therapy",
                "Communication Skills for Healthy Relationships",
                "Rebuilding Trust After Betrayal",
                "Couples Therapy: What to Expect",
                "Conflict Resolution Strategies for Couples",
                "Maintaining Intimacy During Stressful Times",
            ],
        ),
        area(
            "teens",
            &["teen", "adolescent", "teenager", "youth"],
            &[
                "Teen Mental Health Warning Signs for Parents",
                "Supporting Anxious Teenagers",
                "When Your Teen Needs Therapy",
                "Teen Depression: What Parents Should Know",
                "Helping Teens Build Healthy Coping Skills",
            ],
        ),
        area(
            "trauma",
            &["trauma", "ptsd", "emdr", "healing"],
            &[
                "What is EMDR Therapy and How Does It Work",
                "Healing from Past Trauma",
                "Understanding Complex PTSD",
                "Trauma-Informed Therapy Approaches",
            ],
        ),
        area(
            "general",
            &["therapy", "counseling", "mental health", "wellness"],
            &[
                "How to Find the Right Therapist in Hendersonville NC",
                "What to Expect in Your First Therapy Session",
                "Does Insurance Cover Therapy",
                "Self-Care Strategies for Mental Wellness",
                "Breaking the Stigma Around Therapy",
            ],
        ),
    ]
}
