use axum::Json;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::models::nutrition::{DailyNutrition, NutritionTarget};
use crate::models::plan::MesocycleWeek;
use crate::models::profile::{AthleteProfile, ProfileInput, athlete_age};
use crate::models::session::{DaySession, Slot};
use crate::services::nutrition::NutritionCalculator;
use crate::services::schedule::generate_weekly_plan;

#[derive(Debug, Deserialize)]
pub struct DailyNeedsRequest {
    pub profile: ProfileInput,
    pub birthdate: NaiveDate,
    pub session: DaySession,
    /// Defaults to the slot the athlete's time preference would choose.
    #[serde(default)]
    pub slot: Option<Slot>,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyNeedsRequest {
    pub profile: ProfileInput,
    pub birthdate: NaiveDate,
    #[serde(default)]
    pub mesocycle_week: MesocycleWeek,
}

pub async fn daily_needs_handler(
    Json(request): Json<DailyNeedsRequest>,
) -> Result<Json<NutritionTarget>, ApiError> {
    daily_needs(request, Local::now().date_naive()).map(Json)
}

pub async fn weekly_needs_handler(
    Json(request): Json<WeeklyNeedsRequest>,
) -> Result<Json<Vec<DailyNutrition>>, ApiError> {
    weekly_needs(request, Local::now().date_naive()).map(Json)
}

fn daily_needs(request: DailyNeedsRequest, today: NaiveDate) -> Result<NutritionTarget, ApiError> {
    let profile = AthleteProfile::try_from(request.profile)?;
    let age = athlete_age(request.birthdate, today)?;
    let slot = request
        .slot
        .unwrap_or_else(|| profile.time_pref.single_session_slot());

    Ok(NutritionCalculator::default().calculate_daily_needs(&profile, age, &request.session, slot))
}

fn weekly_needs(
    request: WeeklyNeedsRequest,
    today: NaiveDate,
) -> Result<Vec<DailyNutrition>, ApiError> {
    let profile = AthleteProfile::try_from(request.profile)?;
    let age = athlete_age(request.birthdate, today)?;
    let plan = generate_weekly_plan(&profile, request.mesocycle_week);

    Ok(NutritionCalculator::default().calculate_weekly_needs(&profile, age, &plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileError;
    use crate::models::profile::tests::sample_input;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_needs_for_rest_day() {
        let request = DailyNeedsRequest {
            profile: sample_input(),
            birthdate: date(1994, 1, 10),
            session: DaySession::Rest,
            slot: None,
        };

        let target = daily_needs(request, date(2024, 3, 1)).unwrap();
        assert_eq!(target.calories, 1978);
        assert_eq!(target.carbs_g, 212);
    }

    #[test]
    fn test_daily_needs_rejects_future_birthdate() {
        let request = DailyNeedsRequest {
            profile: sample_input(),
            birthdate: date(2030, 1, 1),
            session: DaySession::Rest,
            slot: None,
        };

        let error = daily_needs(request, date(2024, 3, 1)).unwrap_err();
        assert!(matches!(
            error,
            ApiError::InvalidProfile(ProfileError::BirthdateInFuture(_))
        ));
    }

    #[test]
    fn test_daily_request_deserializes_session_json() {
        let request: DailyNeedsRequest = serde_json::from_value(serde_json::json!({
            "profile": sample_input(),
            "birthdate": "1990-05-20",
            "session": { "type": "Rest" },
            "slot": "PM"
        }))
        .unwrap();

        assert_eq!(request.slot, Some(Slot::Pm));
        assert!(request.session.is_rest());
    }

    #[test]
    fn test_weekly_needs_cover_every_day() {
        let request = WeeklyNeedsRequest {
            profile: sample_input(),
            birthdate: date(1994, 1, 10),
            mesocycle_week: MesocycleWeek::new(3),
        };

        let week = weekly_needs(request, date(2024, 3, 1)).unwrap();
        assert_eq!(week.len(), 7);
        assert!(week.iter().all(|entry| entry.target.carbs_g >= 120));
        assert_eq!(week[6].target.day_context.label, "Recovery");
    }

    #[tokio::test]
    async fn test_weekly_handler_rejects_unknown_rest_day() {
        let mut profile = sample_input();
        profile.preferred_rest_day = "Caturday".to_string();
        let request = WeeklyNeedsRequest {
            profile,
            birthdate: date(1994, 1, 10),
            mesocycle_week: MesocycleWeek::FIRST,
        };

        assert!(weekly_needs_handler(Json(request)).await.is_err());
    }
}
