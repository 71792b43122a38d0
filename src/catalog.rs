//! Fixed activity catalog seeded at process start.

use std::collections::BTreeMap;

use crate::roster::Activity;

const SCHOOL_DOMAIN: &str = "mergington.edu";

/// (name, description, schedule, max participants, initial roster handles)
const SEED: &[(&str, &str, &str, u32, [&str; 2])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael", "daniel"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma", "sophia"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john", "olivia"],
    ),
    (
        "Basketball Team",
        "Competitive basketball training and inter-school matches",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        15,
        ["james", "lucas"],
    ),
    (
        "Swimming Club",
        "Swimming techniques and endurance training",
        "Wednesdays, 3:30 PM - 5:00 PM",
        20,
        ["ava", "mia"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and mixed media art projects",
        "Thursdays, 3:30 PM - 5:30 PM",
        15,
        ["isabella", "charlotte"],
    ),
    (
        "Drama Club",
        "Acting, stage performance, and annual theater productions",
        "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        25,
        ["william", "amelia"],
    ),
    (
        "Debate Team",
        "Develop critical thinking and public speaking skills through competitive debates",
        "Fridays, 4:00 PM - 5:30 PM",
        16,
        ["ethan", "harper"],
    ),
    (
        "Science Olympiad",
        "Prepare for science competitions and conduct experiments",
        "Tuesdays, 3:30 PM - 5:00 PM",
        18,
        ["benjamin", "evelyn"],
    ),
];

/// The nine activities every process starts with.
#[must_use]
pub fn default_catalog() -> BTreeMap<String, Activity> {
    SEED.iter()
        .map(|(name, description, schedule, max_participants, handles)| {
            let activity = Activity {
                description: (*description).to_owned(),
                schedule: (*schedule).to_owned(),
                max_participants: *max_participants,
                participants: handles.iter().map(|h| format!("{h}@{SCHOOL_DOMAIN}")).collect(),
            };
            ((*name).to_owned(), activity)
        })
        .collect()
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
