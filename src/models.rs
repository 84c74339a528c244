use serde::{Deserialize, Serialize};

/// Catalog entry describing an exercise a user can log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub equipment: String,
}

/// One logged exercise inside a workout. Numeric fields default to zero so
/// partially-filled entries never poison the volume totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: u64,
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub calories: u64,
    pub exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Workout {
    /// Shallow merge: fields present in the update overwrite, absent fields
    /// keep their prior value. Stamps `updated_at` with the supplied time.
    pub fn apply_update(&mut self, update: UpdateWorkoutRequest, now: String) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
        if let Some(exercises) = update.exercises {
            self.exercises = exercises;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        self.updated_at = Some(now);
    }
}

// Required fields are Option here so handlers can reject missing ones with a
// 400 and a message instead of an opaque extractor failure.
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub equipment: Option<String>,
}

// `exercises` stays a raw value so a present-but-not-an-array body can be
// rejected with a 400 in the handler rather than an extractor 422.
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    pub date: Option<String>,
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub calories: Option<u64>,
    pub exercises: Option<serde_json::Value>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub date: Option<String>,
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub calories: Option<u64>,
    pub exercises: Option<Vec<ExerciseEntry>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseFrequency {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_workouts: usize,
    pub total_exercises: usize,
    pub total_weight: f64,
    pub average_workouts_per_week: f64,
    pub most_frequent_exercise: Option<ExerciseFrequency>,
}

/// Parallel sequences for the weekly progress chart, ascending week-key order.
#[derive(Debug, Serialize)]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub workouts: Vec<u64>,
    pub calories: Vec<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_workouts: usize,
    pub workouts_this_week: usize,
    pub current_streak: u32,
    pub total_calories: u64,
    pub weekly: WeeklySeries,
}

#[derive(Debug, Serialize)]
pub struct DeleteWorkoutResponse {
    pub message: String,
    pub workout: Workout,
}
