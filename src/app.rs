use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/exercises",
            get(handlers::list_exercises).post(handlers::create_exercise),
        )
        .route(
            "/api/workouts",
            get(handlers::list_workouts).post(handlers::create_workout),
        )
        .route(
            "/api/workouts/:id",
            get(handlers::get_workout)
                .put(handlers::update_workout)
                .delete(handlers::delete_workout),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .with_state(state)
}
