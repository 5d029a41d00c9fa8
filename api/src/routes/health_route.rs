//! GET / — liveness probe, no side effects.

pub async fn home() -> &'static str {
    "AI Travel Planner Backend is running!"
}
