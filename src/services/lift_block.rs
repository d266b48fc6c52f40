use serde::{Deserialize, Serialize};

use crate::models::plan::MesocycleWeek;
use crate::models::session::{
    LiftBlock, Progression, ProgressionWeek, WarmupSet, WorkingSets,
};

const PROGRESSION_NOTE: &str =
    "After week 4, retest 1RM or increase by 2.5-5kg and restart cycle";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingParams {
    pub intensity: f64, // fraction of 1RM
    pub sets: u32,
    pub reps: u32,
}

impl LoadingParams {
    pub fn with_sets(self, sets: u32) -> Self {
        Self { sets, ..self }
    }

    pub fn percentage_label(&self) -> String {
        format!("{}%", (self.intensity * 100.0).round() as u32)
    }
}

/// Per-week loading for the 4-week linear cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingTable {
    weeks: [LoadingParams; 4],
}

impl Default for LoadingTable {
    fn default() -> Self {
        Self {
            weeks: [
                LoadingParams { intensity: 0.65, sets: 3, reps: 5 },
                LoadingParams { intensity: 0.70, sets: 3, reps: 5 },
                LoadingParams { intensity: 0.75, sets: 4, reps: 5 },
                LoadingParams { intensity: 0.80, sets: 4, reps: 5 },
            ],
        }
    }
}

impl LoadingTable {
    pub fn new(weeks: [LoadingParams; 4]) -> Self {
        Self { weeks }
    }

    pub fn for_week(&self, week: MesocycleWeek) -> LoadingParams {
        self.weeks[week.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrengthConfig {
    pub session_minutes: u32,
    pub bar_weight_kg: f64,
    pub compound_rest_seconds: u32,
    pub accessory_rest_seconds: u32,
    pub bench_from_press_factor: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            session_minutes: 60,
            bar_weight_kg: 20.0,
            compound_rest_seconds: 180,
            accessory_rest_seconds: 90,
            bench_from_press_factor: 1.3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LiftBlockCalculator<'a> {
    table: &'a LoadingTable,
    config: &'a StrengthConfig,
}

impl<'a> LiftBlockCalculator<'a> {
    pub fn new(table: &'a LoadingTable, config: &'a StrengthConfig) -> Self {
        Self { table, config }
    }

    /// Build warmups, working sets and the 4-week trajectory for one lift.
    /// Returns `None` when no usable one-rep max is known.
    pub fn build(
        &self,
        exercise: &str,
        one_rep_max: Option<f64>,
        params: LoadingParams,
        week: MesocycleWeek,
    ) -> Option<LiftBlock> {
        let one_rep_max = one_rep_max.filter(|max| max.is_finite() && *max > 0.0)?;
        let working_weight = round_to_tenth(one_rep_max * params.intensity);

        Some(LiftBlock {
            exercise_name: exercise.to_string(),
            one_rep_max,
            warmup_sets: self.warmup_sets(working_weight),
            working_sets: WorkingSets {
                sets: params.sets,
                reps: params.reps,
                weight_kg: working_weight,
                percentage_1rm: params.percentage_label(),
                rest_period: format!("{} seconds", self.config.compound_rest_seconds),
            },
            progression: self.progression(one_rep_max, week),
        })
    }

    pub fn progression(&self, one_rep_max: f64, current_week: MesocycleWeek) -> Progression {
        let trajectory = MesocycleWeek::all()
            .map(|week| {
                let loading = self.table.for_week(week);
                ProgressionWeek {
                    week: week.get(),
                    weight_kg: round_to_tenth(one_rep_max * loading.intensity),
                    sets: loading.sets,
                    reps: loading.reps,
                    percentage: loading.percentage_label(),
                }
            })
            .collect();

        Progression {
            current_week: current_week.get(),
            trajectory,
            note: PROGRESSION_NOTE.to_string(),
        }
    }

    fn warmup_sets(&self, working_weight: f64) -> Vec<WarmupSet> {
        vec![
            WarmupSet {
                label: "Bar Only".to_string(),
                weight_kg: self.config.bar_weight_kg,
                reps: 10,
                note: "Movement prep, joint mobilization".to_string(),
            },
            WarmupSet {
                label: "Light Warmup".to_string(),
                weight_kg: round_to_tenth(working_weight * 0.50),
                reps: 5,
                note: "50% of working weight".to_string(),
            },
            WarmupSet {
                label: "Heavy Warmup".to_string(),
                weight_kg: round_to_tenth(working_weight * 0.75),
                reps: 3,
                note: "75% of working weight, CNS priming".to_string(),
            },
        ]
    }
}

/// One decimal place, ties to even on the exact binary value.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
