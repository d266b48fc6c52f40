use tracing::debug;

use crate::models::nutrition::{DailyNutrition, DayContext, NutritionTarget, TimingAdvice};
use crate::models::plan::WeeklyPlan;
use crate::models::profile::{AthleteProfile, Goal};
use crate::models::session::{DaySession, SessionIntensity, Slot};
use crate::services::lift_block::round_to_tenth;

const KCAL_PER_G_PROTEIN: i64 = 4;
const KCAL_PER_G_CARB: i64 = 4;
const KCAL_PER_G_FAT: i64 = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionConstants {
    pub sedentary_multiplier: f64,
    /// kcal per kg bodyweight per hour of session, by intensity
    pub strength_factor: f64,
    pub high_intensity_factor: f64,
    pub endurance_base_factor: f64,
    pub active_recovery_factor: f64,
    pub lose_adjustment_kcal: i64,
    pub build_adjustment_kcal: i64,
    pub protein_g_per_kg: f64,
    pub fat_g_per_kg: f64,
    pub carb_floor_g: i64,
    pub hydration_l_per_kg: f64,
    pub hydration_l_per_hour: f64,
    pub intra_workout_fuel_min: u32,
}

impl Default for NutritionConstants {
    fn default() -> Self {
        Self {
            sedentary_multiplier: 1.2,
            strength_factor: 6.0,
            high_intensity_factor: 11.0,
            endurance_base_factor: 8.0,
            active_recovery_factor: 5.0,
            lose_adjustment_kcal: -500,
            build_adjustment_kcal: 300,
            protein_g_per_kg: 2.0,
            fat_g_per_kg: 0.9,
            carb_floor_g: 120,
            hydration_l_per_kg: 0.035,
            hydration_l_per_hour: 0.6,
            intra_workout_fuel_min: 75,
        }
    }
}

/// Stateless: every call derives its target from the inputs alone.
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator {
    constants: NutritionConstants,
}

impl NutritionCalculator {
    pub fn new(constants: NutritionConstants) -> Self {
        Self { constants }
    }

    /// Mifflin-St Jeor: 10 x kg + 6.25 x cm - 5 x age + 5
    pub fn bmr(&self, profile: &AthleteProfile, age: u32) -> f64 {
        10.0 * profile.bodyweight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(age) + 5.0
    }

    pub fn activity_calories(&self, profile: &AthleteProfile, session: &DaySession) -> f64 {
        let c = &self.constants;
        let factor = match session.intensity() {
            SessionIntensity::Rest => return 0.0,
            SessionIntensity::Strength => c.strength_factor,
            SessionIntensity::HighIntensity => c.high_intensity_factor,
            SessionIntensity::EnduranceBase => c.endurance_base_factor,
            SessionIntensity::ActiveRecovery => c.active_recovery_factor,
        };
        factor * profile.bodyweight_kg * duration_hours(session)
    }

    pub fn goal_adjustment(&self, goal: Goal) -> i64 {
        match goal {
            Goal::Lose => self.constants.lose_adjustment_kcal,
            Goal::Build => self.constants.build_adjustment_kcal,
            Goal::Maintain => 0,
        }
    }

    /// `slot` selects the pre-workout advice and is ignored for rest.
    pub fn calculate_daily_needs(
        &self,
        profile: &AthleteProfile,
        age: u32,
        session: &DaySession,
        slot: Slot,
    ) -> NutritionTarget {
        let c = &self.constants;
        let bmr = self.bmr(profile, age);
        let maintenance = bmr * c.sedentary_multiplier + self.activity_calories(profile, session);

        let mut calories = (maintenance + self.goal_adjustment(profile.goal) as f64) as i64;
        if (calories as f64) < bmr {
            calories = bmr.ceil() as i64;
        }

        let protein_g = (profile.bodyweight_kg * c.protein_g_per_kg) as i64;
        let fat_g = (profile.bodyweight_kg * c.fat_g_per_kg) as i64;
        let macro_kcal = protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT;

        let mut carbs_g = ((calories - macro_kcal) as f64 / KCAL_PER_G_CARB as f64) as i64;
        if carbs_g < c.carb_floor_g {
            carbs_g = c.carb_floor_g;
            calories = macro_kcal + carbs_g * KCAL_PER_G_CARB;
        }

        let hours = duration_hours(session);
        let intensity = session.intensity();

        debug!(
            intensity = ?intensity,
            bmr,
            calories,
            carbs_g,
            "nutrition.calculated"
        );

        NutritionTarget {
            day_context: DayContext {
                intensity,
                label: intensity.label().to_string(),
                duration_min: session.duration_min(),
            },
            calories,
            protein_g,
            carbs_g,
            fat_g,
            hydration_liters: round_to_tenth(
                c.hydration_l_per_kg * profile.bodyweight_kg + hours * c.hydration_l_per_hour,
            ),
            timing: self.timing(session, slot),
        }
    }

    /// One target per calendar day, fueled for that day's key session.
    pub fn calculate_weekly_needs(
        &self,
        profile: &AthleteProfile,
        age: u32,
        plan: &WeeklyPlan,
    ) -> Vec<DailyNutrition> {
        plan.days
            .iter()
            .map(|day| {
                let target = match day.key_session() {
                    Some((slot, session)) => {
                        self.calculate_daily_needs(profile, age, session, slot)
                    }
                    None => self.calculate_daily_needs(profile, age, &DaySession::Rest, Slot::Am),
                };
                DailyNutrition {
                    day: day.day,
                    target,
                }
            })
            .collect()
    }

    fn timing(&self, session: &DaySession, slot: Slot) -> Vec<TimingAdvice> {
        if session.is_rest() {
            return vec![TimingAdvice::new(
                "All Day",
                "Spread meals evenly. Focus on protein quality and hydration.",
            )];
        }

        let mut schedule = Vec::with_capacity(3);

        schedule.push(match slot {
            Slot::Am => TimingAdvice::new(
                "Pre-Workout (AM)",
                "Fast digesting carbs + whey (e.g., Banana + Shake). Avoid heavy fats.",
            ),
            Slot::Pm => TimingAdvice::new(
                "Pre-Workout (60m prior)",
                "Balanced meal: Chicken/Rice or Oats. ~40g Carbs.",
            ),
        });

        if session.duration_min() >= self.constants.intra_workout_fuel_min {
            schedule.push(TimingAdvice::new(
                "Intra-Workout",
                "Liquid Carbs + Electrolytes. Target 30-60g carbs per hour.",
            ));
        } else if session.intensity() == SessionIntensity::Strength {
            schedule.push(TimingAdvice::new(
                "Intra-Workout",
                "Water + Electrolytes. Optional: Essential Amino Acids (EAAs).",
            ));
        }

        schedule.push(TimingAdvice::new(
            "Post-Workout (Immediate)",
            "Recovery Window: High Glycemic Carbs + Protein (2:1 Ratio).",
        ));

        schedule
    }
}

pub fn calculate_daily_needs(
    profile: &AthleteProfile,
    age: u32,
    session: &DaySession,
    slot: Slot,
) -> NutritionTarget {
    NutritionCalculator::default().calculate_daily_needs(profile, age, session, slot)
}

fn duration_hours(session: &DaySession) -> f64 {
    f64::from(session.duration_min()) / 60.0
}
