use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::session::Slot;

static LOSE_GOAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)lose|fat|cut").expect("valid goal pattern"));
/// Hours in a week; no training budget can exceed it.
pub const MAX_WEEKLY_HOURS: f64 = 168.0;

static BUILD_GOAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)build|muscle|bulk|gain").expect("valid goal pattern"));

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("weekly training hours must be greater than zero, got {0}")]
    InvalidWeeklyHours(f64),
    #[error("weekly training hours cannot exceed 168, got {0}")]
    WeeklyHoursTooHigh(f64),
    #[error("bodyweight must be greater than zero, got {0}")]
    InvalidBodyweight(f64),
    #[error("height must be greater than zero, got {0}")]
    InvalidHeight(f64),
    #[error("{lift} one-rep max must be a non-negative number, got {value}")]
    InvalidOneRepMax { lift: &'static str, value: f64 },
    #[error("unknown rest day '{0}'")]
    UnknownWeekday(String),
    #[error("unknown training time preference '{0}'")]
    UnknownTimePreference(String),
    #[error("birthdate {0} is in the future")]
    BirthdateInFuture(NaiveDate),
}

/// Profile exactly as a collaborator submits it: free text, optional maxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub primary_endurance: String,
    pub weekly_hours: f64,
    pub preferred_rest_day: String,
    pub training_time_pref: String,
    #[serde(default)]
    pub squat_max: Option<f64>,
    #[serde(default)]
    pub deadlift_max: Option<f64>,
    #[serde(default)]
    pub press_max: Option<f64>,
    #[serde(default)]
    pub bench_max: Option<f64>,
    #[serde(default)]
    pub endurance_metric_type: String,
    #[serde(default)]
    pub endurance_metric_value: Option<f64>,
    pub bodyweight: f64,
    pub height: f64,
    #[serde(default)]
    pub goal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingTimePref {
    Am,
    Pm,
    Mixed,
}

impl TrainingTimePref {
    /// Slot used on days with a single session.
    pub fn single_session_slot(self) -> Slot {
        match self {
            Self::Am => Slot::Am,
            Self::Pm | Self::Mixed => Slot::Pm,
        }
    }
}

impl FromStr for TrainingTimePref {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" | "morning" => Ok(Self::Am),
            "pm" | "evening" => Ok(Self::Pm),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ProfileError::UnknownTimePreference(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Lose,
    Build,
    Maintain,
}

impl Goal {
    /// Classify a free-text goal. Loss keywords win over build keywords.
    pub fn classify(text: &str) -> Self {
        if LOSE_GOAL.is_match(text) {
            Self::Lose
        } else if BUILD_GOAL.is_match(text) {
            Self::Build
        } else {
            Self::Maintain
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OneRepMaxes {
    pub squat: Option<f64>,
    pub deadlift: Option<f64>,
    pub press: Option<f64>,
    pub bench: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnduranceMetric {
    pub metric_type: String,
    pub value: Option<f64>,
}

/// Validated athlete profile. Only enumerations reach the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteProfile {
    pub primary_endurance: String,
    pub weekly_hours: f64,
    pub rest_day: Weekday,
    pub time_pref: TrainingTimePref,
    pub maxes: OneRepMaxes,
    pub endurance_metric: EnduranceMetric,
    pub bodyweight_kg: f64,
    pub height_cm: f64,
    pub goal: Goal,
}

impl TryFrom<ProfileInput> for AthleteProfile {
    type Error = ProfileError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        if !is_positive(input.weekly_hours) {
            return Err(ProfileError::InvalidWeeklyHours(input.weekly_hours));
        }
        if input.weekly_hours > MAX_WEEKLY_HOURS {
            return Err(ProfileError::WeeklyHoursTooHigh(input.weekly_hours));
        }
        if !is_positive(input.bodyweight) {
            return Err(ProfileError::InvalidBodyweight(input.bodyweight));
        }
        if !is_positive(input.height) {
            return Err(ProfileError::InvalidHeight(input.height));
        }

        let rest_day = input
            .preferred_rest_day
            .trim()
            .parse::<Weekday>()
            .map_err(|_| ProfileError::UnknownWeekday(input.preferred_rest_day.clone()))?;
        let time_pref = input.training_time_pref.parse()?;

        let maxes = OneRepMaxes {
            squat: normalize_max("squat", input.squat_max)?,
            deadlift: normalize_max("deadlift", input.deadlift_max)?,
            press: normalize_max("press", input.press_max)?,
            bench: normalize_max("bench", input.bench_max)?,
        };

        Ok(Self {
            primary_endurance: input.primary_endurance,
            weekly_hours: input.weekly_hours,
            rest_day,
            time_pref,
            maxes,
            endurance_metric: EnduranceMetric {
                metric_type: input.endurance_metric_type,
                value: input.endurance_metric_value,
            },
            bodyweight_kg: input.bodyweight,
            height_cm: input.height,
            goal: Goal::classify(&input.goal),
        })
    }
}

/// Completed years between `birthdate` and `today`.
pub fn athlete_age(birthdate: NaiveDate, today: NaiveDate) -> Result<u32, ProfileError> {
    today
        .years_since(birthdate)
        .ok_or(ProfileError::BirthdateInFuture(birthdate))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// Zero means "not tested" and is treated like an absent max.
fn normalize_max(lift: &'static str, value: Option<f64>) -> Result<Option<f64>, ProfileError> {
    match value {
        None => Ok(None),
        Some(v) if !v.is_finite() || v < 0.0 => Err(ProfileError::InvalidOneRepMax { lift, value: v }),
        Some(v) if v == 0.0 => Ok(None),
        Some(v) => Ok(Some(v)),
    }
}
