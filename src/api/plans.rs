use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::models::plan::{MesocycleWeek, WeeklyPlan};
use crate::models::profile::{AthleteProfile, ProfileInput};
use crate::services::schedule::generate_weekly_plan;

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub profile: ProfileInput,
    #[serde(default)]
    pub mesocycle_week: MesocycleWeek,
}

pub async fn generate_plan_handler(
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<WeeklyPlan>, ApiError> {
    let profile = AthleteProfile::try_from(request.profile)?;
    Ok(Json(generate_weekly_plan(&profile, request.mesocycle_week)))
}
