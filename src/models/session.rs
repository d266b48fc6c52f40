use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnduranceRole {
    Long,
    Interval,
    Tempo,
    Base,
    Recovery,
}

impl EnduranceRole {
    pub fn name(self) -> &'static str {
        match self {
            Self::Long => "Long Aerobic Session",
            Self::Interval => "VO2max Intervals",
            Self::Tempo => "Tempo Intervals",
            Self::Base => "Aerobic Base",
            Self::Recovery => "Active Recovery",
        }
    }

    pub fn zone(self) -> &'static str {
        match self {
            Self::Long => "Zone 2: Aerobic Threshold",
            Self::Interval => "Zone 4-5: VO2max",
            Self::Tempo => "Zone 3: Tempo",
            Self::Base => "Zone 2: Endurance",
            Self::Recovery => "Zone 1: Recovery",
        }
    }

    pub fn is_easy(self) -> bool {
        matches!(self, Self::Long | Self::Base | Self::Recovery)
    }

    pub fn intensity(self) -> SessionIntensity {
        match self {
            Self::Interval | Self::Tempo => SessionIntensity::HighIntensity,
            Self::Long => SessionIntensity::EnduranceBase,
            Self::Base | Self::Recovery => SessionIntensity::ActiveRecovery,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthFocus {
    Squat,
    Deadlift,
}

impl fmt::Display for StrengthFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Squat => write!(f, "Squat"),
            Self::Deadlift => write!(f, "Deadlift"),
        }
    }
}

/// Energy-cost class of a session, used for fueling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionIntensity {
    Rest,
    Strength,
    HighIntensity,
    EnduranceBase,
    ActiveRecovery,
}

impl SessionIntensity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rest => "Recovery",
            Self::Strength => "Strength/Hypertrophy",
            Self::HighIntensity => "High Intensity Interval",
            Self::EnduranceBase => "Endurance Base",
            Self::ActiveRecovery => "Active Recovery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPhase {
    pub phase: String,
    pub detail: String,
}

impl WorkoutPhase {
    pub fn new(phase: &str, detail: &str) -> Self {
        Self {
            phase: phase.to_string(),
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnduranceSession {
    pub name: String,
    pub role: EnduranceRole,
    pub zone: String,
    pub duration_min: u32,
    pub description: String,
    pub workout_structure: Option<Vec<WorkoutPhase>>,
    pub modality: String,
    pub metric_type: String,
    pub metric_value: Option<f64>,
    pub is_easy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupSet {
    pub label: String,
    pub weight_kg: f64,
    pub reps: u32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingSets {
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: f64,
    pub percentage_1rm: String,
    pub rest_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionWeek {
    pub week: u8,
    pub weight_kg: f64,
    pub sets: u32,
    pub reps: u32,
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub current_week: u8,
    pub trajectory: Vec<ProgressionWeek>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftBlock {
    pub exercise_name: String,
    pub one_rep_max: f64,
    pub warmup_sets: Vec<WarmupSet>,
    pub working_sets: WorkingSets,
    pub progression: Progression,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainLifts {
    #[serde(rename = "Primary", skip_serializing_if = "Option::is_none", default)]
    pub primary: Option<LiftBlock>,
    #[serde(rename = "Secondary", skip_serializing_if = "Option::is_none", default)]
    pub secondary: Option<LiftBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthSession {
    pub name: String,
    pub focus: StrengthFocus,
    pub duration_min: u32,
    pub training_week: u8,
    pub main_lifts: MainLifts,
    pub accessory_work: Vec<Accessory>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DaySession {
    Endurance(EnduranceSession),
    Strength(StrengthSession),
    Rest,
}

impl DaySession {
    pub fn duration_min(&self) -> u32 {
        match self {
            Self::Endurance(session) => session.duration_min,
            Self::Strength(session) => session.duration_min,
            Self::Rest => 0,
        }
    }

    pub fn intensity(&self) -> SessionIntensity {
        match self {
            Self::Endurance(session) => session.role.intensity(),
            Self::Strength(_) => SessionIntensity::Strength,
            Self::Rest => SessionIntensity::Rest,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_easy_flags() {
        assert!(EnduranceRole::Long.is_easy());
        assert!(EnduranceRole::Base.is_easy());
        assert!(EnduranceRole::Recovery.is_easy());
        assert!(!EnduranceRole::Interval.is_easy());
        assert!(!EnduranceRole::Tempo.is_easy());
    }

    #[test]
    fn test_role_intensity_mapping() {
        assert_eq!(
            EnduranceRole::Interval.intensity(),
            SessionIntensity::HighIntensity
        );
        assert_eq!(
            EnduranceRole::Tempo.intensity(),
            SessionIntensity::HighIntensity
        );
        assert_eq!(
            EnduranceRole::Long.intensity(),
            SessionIntensity::EnduranceBase
        );
        assert_eq!(
            EnduranceRole::Base.intensity(),
            SessionIntensity::ActiveRecovery
        );
        assert_eq!(DaySession::Rest.intensity(), SessionIntensity::Rest);
        assert_eq!(DaySession::Rest.duration_min(), 0);
    }

    #[test]
    fn test_day_session_is_tagged_by_type() {
        let json = serde_json::to_value(DaySession::Rest).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Rest" }));

        let slot = serde_json::to_value(Slot::Pm).unwrap();
        assert_eq!(slot, serde_json::json!("PM"));
    }

    #[test]
    fn test_endurance_session_deserializes_from_json() {
        let session: DaySession = serde_json::from_value(serde_json::json!({
            "type": "Endurance",
            "name": "VO2max Intervals",
            "role": "interval",
            "zone": "Zone 4-5: VO2max",
            "duration_min": 75,
            "description": "",
            "workout_structure": null,
            "modality": "Cycling",
            "metric_type": "FTP",
            "metric_value": 250.0,
            "is_easy": false
        }))
        .unwrap();

        assert_eq!(session.duration_min(), 75);
        assert_eq!(session.intensity(), SessionIntensity::HighIntensity);
    }
}
