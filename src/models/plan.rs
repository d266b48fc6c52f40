use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::session::{DaySession, Slot};

/// Calendar order of a plan, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Week 1..=4 of the strength loading cycle. Out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct MesocycleWeek(u8);

impl MesocycleWeek {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(4);

    pub fn new(week: i64) -> Self {
        Self(week.clamp(1, 4) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (1..=4).map(Self)
    }
}

impl Default for MesocycleWeek {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for MesocycleWeek {
    fn from(week: i64) -> Self {
        Self::new(week)
    }
}

impl From<MesocycleWeek> for u8 {
    fn from(week: MesocycleWeek) -> Self {
        week.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Weekday,
    #[serde(rename = "AM")]
    pub am: Option<DaySession>,
    #[serde(rename = "PM")]
    pub pm: Option<DaySession>,
}

impl DayPlan {
    pub fn rest(day: Weekday) -> Self {
        Self {
            day,
            am: None,
            pm: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.am.is_none() && self.pm.is_none()
    }

    pub fn sessions(&self) -> impl Iterator<Item = (Slot, &DaySession)> {
        [(Slot::Am, self.am.as_ref()), (Slot::Pm, self.pm.as_ref())]
            .into_iter()
            .filter_map(|(slot, session)| session.map(|s| (slot, s)))
    }

    /// The session the day is fueled for: the longer one, AM on a tie.
    pub fn key_session(&self) -> Option<(Slot, &DaySession)> {
        self.sessions().fold(None, |best, candidate| match best {
            Some((_, current)) if current.duration_min() >= candidate.1.duration_min() => best,
            _ => Some(candidate),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polarization {
    pub target_easy_pct: u32,
    pub actual_easy_pct: u32,
    pub target_hard_pct: u32,
    pub actual_hard_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub target_total_hours: f64,
    pub actual_total_hours: f64,
    pub target_endurance_min: u32,
    pub actual_endurance_min: u32,
    pub target_strength_min: u32,
    pub actual_strength_min: u32,
    pub easy_min: u32,
    pub hard_min: u32,
    pub polarization: Polarization,
    pub within_tolerance: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub mesocycle_week: MesocycleWeek,
    pub days: Vec<DayPlan>,
    pub validation: ValidationReport,
}

impl WeeklyPlan {
    pub fn day(&self, day: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }
}
