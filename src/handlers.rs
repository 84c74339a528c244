use crate::errors::AppError;
use crate::models::{
    CreateExerciseRequest, CreateWorkoutRequest, DashboardResponse, DeleteWorkoutResponse,
    Exercise, ExerciseEntry, StatsResponse, UpdateWorkoutRequest, Workout,
};
use crate::state::AppState;
use crate::stats;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use chrono::{SecondsFormat, Utc};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn list_exercises(State(state): State<AppState>) -> Json<Vec<Exercise>> {
    Json(state.store.list().await)
}

pub async fn create_exercise(
    State(state): State<AppState>,
    Json(payload): Json<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>), AppError> {
    let name = payload
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::bad_request("Exercise name is required"))?;

    let exercise = Exercise {
        id: 0,
        name,
        category: payload.category.unwrap_or_else(|| "other".to_string()),
        equipment: payload.equipment.unwrap_or_else(|| "unknown".to_string()),
    };
    let created = state.store.insert(exercise).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_workouts(State(state): State<AppState>) -> Json<Vec<Workout>> {
    Json(state.store.list().await)
}

pub async fn create_workout(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>), AppError> {
    let (Some(date), Some(exercises)) = (payload.date, payload.exercises) else {
        return Err(AppError::bad_request("Date and exercises array are required"));
    };
    if !exercises.is_array() {
        return Err(AppError::bad_request("Date and exercises array are required"));
    }
    let exercises: Vec<ExerciseEntry> = serde_json::from_value(exercises)
        .map_err(|_| AppError::bad_request("Invalid exercise entries"))?;

    let workout = Workout {
        id: 0,
        date,
        name: payload.name.unwrap_or_default(),
        duration: payload.duration.unwrap_or_default(),
        calories: payload.calories.unwrap_or_default(),
        exercises,
        notes: payload.notes.unwrap_or_default(),
        created_at: iso_timestamp(),
        updated_at: None,
    };
    let created = state.store.insert(workout).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Workout>, AppError> {
    Ok(Json(state.store.find_by_id(id).await?))
}

pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateWorkoutRequest>,
) -> Result<Json<Workout>, AppError> {
    let now = iso_timestamp();
    let updated = state
        .store
        .update::<Workout, _>(id, |workout| workout.apply_update(payload, now))
        .await?;
    Ok(Json(updated))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteWorkoutResponse>, AppError> {
    let workout = state.store.remove(id).await?;
    Ok(Json(DeleteWorkoutResponse {
        message: "Workout deleted successfully".to_string(),
        workout,
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let workouts: Vec<Workout> = state.store.list().await;
    Json(stats::build_stats(&workouts))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let workouts: Vec<Workout> = state.store.list().await;
    Json(stats::build_dashboard(&workouts))
}

fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
