use serde::Serialize;
use utoipa::ToSchema;

/// A built-in exercise the workout builder can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CatalogExercise {
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub category: &'static str,
    #[schema(value_type = String)]
    pub equipment: &'static str,
}

const fn entry(name: &'static str, category: &'static str, equipment: &'static str) -> CatalogExercise {
    CatalogExercise {
        name,
        category,
        equipment,
    }
}

pub const EXERCISE_CATALOG: &[CatalogExercise] = &[
    // Chest
    entry("Bench Press", "Chest", "Barbell"),
    entry("Incline Bench Press", "Chest", "Barbell"),
    entry("Decline Bench Press", "Chest", "Barbell"),
    entry("Dumbbell Chest Press", "Chest", "Dumbbell"),
    entry("Dumbbell Fly", "Chest", "Dumbbell"),
    entry("Push-Ups", "Chest", "Bodyweight"),
    entry("Cable Chest Fly", "Chest", "Cable"),
    entry("Dumbbell Pullover", "Chest", "Dumbbell"),
    entry("Incline Dumbbell Press", "Chest", "Dumbbell"),
    entry("Machine Chest Press", "Chest", "Machine"),
    // Back
    entry("Pull-Ups", "Back", "Bodyweight"),
    entry("Chin-Ups", "Back", "Bodyweight"),
    entry("Lat Pulldown", "Back", "Machine"),
    entry("Barbell Row", "Back", "Barbell"),
    entry("Dumbbell Row", "Back", "Dumbbell"),
    entry("Face Pulls", "Back", "Cable"),
    entry("Shrugs", "Back", "Barbell"),
    entry("T-Bar Row", "Back", "Barbell"),
    entry("Seated Cable Row", "Back", "Cable"),
    entry("Reverse Fly", "Back", "Dumbbell"),
    entry("Reverse Cable Fly", "Back", "Cable"),
    // Legs
    entry("Squat", "Legs", "Barbell"),
    entry("Front Squat", "Legs", "Barbell"),
    entry("Lunges", "Legs", "Bodyweight"),
    entry("Leg Press", "Legs", "Machine"),
    entry("Leg Curl", "Legs", "Machine"),
    entry("Leg Extension", "Legs", "Machine"),
    entry("Calf Raises", "Legs", "Bodyweight/Barbell"),
    entry("Glute Bridge", "Legs", "Bodyweight/Barbell"),
    entry("Hip Thrust", "Legs", "Barbell"),
    entry("Step-Ups", "Legs", "Bodyweight/Dumbbell"),
    entry("Side Lunges", "Legs", "Bodyweight/Dumbbell"),
    // Shoulders
    entry("Overhead Press", "Shoulders", "Barbell"),
    entry("Dumbbell Shoulder Press", "Shoulders", "Dumbbell"),
    entry("Lateral Raise", "Shoulders", "Dumbbell"),
    entry("Front Raise", "Shoulders", "Dumbbell"),
    entry("Arnold Press", "Shoulders", "Dumbbell"),
    entry("Upright Row", "Shoulders", "Barbell"),
    entry("Face Pull", "Shoulders", "Cable"),
    entry("Cable Lateral Raise", "Shoulders", "Cable"),
    // Traps
    entry("Dumbbell Shrugs", "Traps", "Dumbbell"),
    entry("Barbell Shrugs", "Traps", "Barbell"),
    // Arms
    entry("Bicep Curl", "Biceps", "Barbell"),
    entry("Hammer Curl", "Biceps", "Dumbbell"),
    entry("Preacher Curl", "Biceps", "Barbell"),
    entry("Concentration Curl", "Biceps", "Dumbbell"),
    entry("Incline Dumbbell Curl", "Biceps", "Dumbbell"),
    entry("Barbell Curl", "Biceps", "Barbell"),
    entry("Seated Dumbbell Curl", "Biceps", "Dumbbell"),
    entry("Tricep Pushdown", "Triceps", "Cable"),
    entry("Tricep Extension", "Triceps", "Dumbbell"),
    entry("Close Grip Bench Press", "Triceps", "Barbell"),
    entry("Dips", "Triceps", "Bodyweight"),
    entry("Overhead Tricep Extension", "Triceps", "Dumbbell"),
    entry("Cable Tricep Pushdown", "Triceps", "Cable"),
    entry("Overhead Cable Tricep Extension", "Triceps", "Cable"),
    // Core
    entry("Plank", "Core", "Bodyweight"),
    entry("Russian Twist", "Core", "Bodyweight"),
    entry("Hanging Leg Raise", "Core", "Bodyweight"),
    entry("Crunches", "Core", "Bodyweight"),
    entry("Mountain Climbers", "Core", "Bodyweight"),
    entry("Bicycle Crunch", "Core", "Bodyweight"),
    // Full body
    entry("Burpees", "Full Body", "Bodyweight"),
    entry("Kettlebell Swing", "Full Body", "Kettlebell"),
    entry("Jumping Jacks", "Full Body", "Bodyweight"),
    entry("Rowing Machine", "Full Body", "Machine"),
    // Cardio
    entry("Running", "Cardio", "Bodyweight"),
    entry("Cycling", "Cardio", "Bike"),
    entry("Swimming", "Cardio", "Bodyweight"),
    entry("Jump Rope", "Cardio", "Rope"),
];

/// Catalog entries whose name contains `query` and whose category equals
/// `category`, both case-insensitive. Empty filters match everything.
pub fn search_catalog(query: Option<&str>, category: Option<&str>) -> Vec<CatalogExercise> {
    let query = query.map(|q| q.trim().to_lowercase()).filter(|q| !q.is_empty());
    let category = category.map(str::trim).filter(|c| !c.is_empty());

    EXERCISE_CATALOG
        .iter()
        .filter(|exercise| {
            query
                .as_ref()
                .is_none_or(|q| exercise.name.to_lowercase().contains(q.as_str()))
        })
        .filter(|exercise| category.is_none_or(|c| exercise.category.eq_ignore_ascii_case(c)))
        .copied()
        .collect()
}
