use crate::models::plan::MesocycleWeek;
use crate::models::profile::AthleteProfile;
use crate::models::session::{
    Accessory, EnduranceRole, EnduranceSession, MainLifts, StrengthFocus, StrengthSession,
    WorkoutPhase,
};
use crate::services::lift_block::{LiftBlockCalculator, LoadingTable, StrengthConfig};

const INTERVAL_MINUTES: u32 = 75;
const TEMPO_MINUTES: u32 = 75;
const RECOVERY_MINUTES: u32 = 45;
const FACE_PULL_REST_SECONDS: u32 = 60;

/// Minutes per session role, fixed once per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDurations {
    pub long: u32,
    pub interval: u32,
    pub tempo: u32,
    pub base: u32,
    pub recovery: u32,
    pub strength: u32,
}

impl SessionDurations {
    pub fn from_weekly_hours(weekly_hours: f64, strength_minutes: u32) -> Self {
        let endurance = weekly_hours * 60.0 * 0.80;
        let easy = endurance * 0.80;
        let long = whole_minutes(endurance * 0.25);
        let remaining_easy = (easy - f64::from(long)).max(0.0);

        Self {
            long,
            interval: INTERVAL_MINUTES,
            tempo: TEMPO_MINUTES,
            base: whole_minutes(remaining_easy / f64::from(base_session_count(weekly_hours))),
            recovery: RECOVERY_MINUTES,
            strength: strength_minutes,
        }
    }

    pub fn for_role(&self, role: EnduranceRole) -> u32 {
        match role {
            EnduranceRole::Long => self.long,
            EnduranceRole::Interval => self.interval,
            EnduranceRole::Tempo => self.tempo,
            EnduranceRole::Base => self.base,
            EnduranceRole::Recovery => self.recovery,
        }
    }
}

/// How many sessions share the remaining easy volume.
pub fn base_session_count(weekly_hours: f64) -> u32 {
    if weekly_hours > 12.0 {
        3
    } else if weekly_hours > 10.0 {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeTargets {
    pub endurance_minutes: u32,
    pub strength_minutes: u32,
    pub easy_minutes: u32,
    pub hard_minutes: u32,
}

impl VolumeTargets {
    pub fn from_weekly_hours(weekly_hours: f64) -> Self {
        let total = weekly_hours * 60.0;
        let endurance = total * 0.80;

        Self {
            endurance_minutes: whole_minutes(endurance),
            strength_minutes: whole_minutes(total * 0.20),
            easy_minutes: whole_minutes(endurance * 0.80),
            hard_minutes: whole_minutes(endurance * 0.20),
        }
    }
}

// Truncates like integer minutes, tolerating float noise such as 383.99999999.
fn whole_minutes(minutes: f64) -> u32 {
    (minutes + 1e-9).floor().max(0.0) as u32
}

/// Running minute totals for one generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinuteLedger {
    pub easy: u32,
    pub hard: u32,
    pub strength: u32,
}

impl MinuteLedger {
    pub fn record_endurance(&mut self, minutes: u32, is_easy: bool) {
        if is_easy {
            self.easy += minutes;
        } else {
            self.hard += minutes;
        }
    }

    pub fn record_strength(&mut self, minutes: u32) {
        self.strength += minutes;
    }

    pub fn endurance(&self) -> u32 {
        self.easy + self.hard
    }

    pub fn total(&self) -> u32 {
        self.endurance() + self.strength
    }
}

/// Everything one plan generation needs, computed once from the profile.
#[derive(Debug, Clone)]
pub struct PlanningContext<'a> {
    pub profile: &'a AthleteProfile,
    pub week: MesocycleWeek,
    pub durations: SessionDurations,
    pub targets: VolumeTargets,
    pub loading: LoadingTable,
    pub strength: StrengthConfig,
}

impl<'a> PlanningContext<'a> {
    pub fn new(profile: &'a AthleteProfile, week: MesocycleWeek) -> Self {
        Self::with_tables(profile, week, LoadingTable::default(), StrengthConfig::default())
    }

    pub fn with_tables(
        profile: &'a AthleteProfile,
        week: MesocycleWeek,
        loading: LoadingTable,
        strength: StrengthConfig,
    ) -> Self {
        Self {
            profile,
            week,
            durations: SessionDurations::from_weekly_hours(
                profile.weekly_hours,
                strength.session_minutes,
            ),
            targets: VolumeTargets::from_weekly_hours(profile.weekly_hours),
            loading,
            strength,
        }
    }
}

pub struct SessionBuilder<'c> {
    ctx: &'c PlanningContext<'c>,
}

impl<'c> SessionBuilder<'c> {
    pub fn new(ctx: &'c PlanningContext<'c>) -> Self {
        Self { ctx }
    }

    pub fn endurance(&self, role: EnduranceRole, ledger: &mut MinuteLedger) -> EnduranceSession {
        let profile = self.ctx.profile;
        let duration_min = self.ctx.durations.for_role(role);
        let is_easy = role.is_easy();
        let (description, workout_structure) = endurance_content(role);

        ledger.record_endurance(duration_min, is_easy);

        EnduranceSession {
            name: role.name().to_string(),
            role,
            zone: role.zone().to_string(),
            duration_min,
            description: description.to_string(),
            workout_structure: Some(workout_structure),
            modality: profile.primary_endurance.clone(),
            metric_type: profile.endurance_metric.metric_type.clone(),
            metric_value: profile.endurance_metric.value,
            is_easy,
        }
    }

    /// Squat and deadlift are never programmed on the same day.
    pub fn strength(&self, focus: StrengthFocus, ledger: &mut MinuteLedger) -> StrengthSession {
        let ctx = self.ctx;
        let maxes = &ctx.profile.maxes;
        let calculator = LiftBlockCalculator::new(&ctx.loading, &ctx.strength);
        let loading = ctx.loading.for_week(ctx.week);

        let (main_lifts, accessory_work) = match focus {
            StrengthFocus::Squat => (
                MainLifts {
                    primary: calculator.build("Back Squat", maxes.squat, loading, ctx.week),
                    secondary: calculator.build(
                        "Overhead Press",
                        maxes.press,
                        loading.with_sets(3),
                        ctx.week,
                    ),
                },
                self.squat_accessories(),
            ),
            StrengthFocus::Deadlift => (
                MainLifts {
                    primary: calculator.build(
                        "Deadlift",
                        maxes.deadlift,
                        loading.with_sets(3),
                        ctx.week,
                    ),
                    secondary: calculator.build(
                        "Bench Press",
                        maxes
                            .press
                            .map(|press| press * ctx.strength.bench_from_press_factor),
                        loading,
                        ctx.week,
                    ),
                },
                self.deadlift_accessories(),
            ),
        };

        let duration_min = ctx.durations.strength;
        ledger.record_strength(duration_min);

        StrengthSession {
            name: format!("Strength: {} Focus", focus),
            focus,
            duration_min,
            training_week: ctx.week.get(),
            main_lifts,
            accessory_work,
            notes: format!(
                "Week {} of 4-week linear progression cycle",
                ctx.week.get()
            ),
        }
    }

    fn squat_accessories(&self) -> Vec<Accessory> {
        let rest = self.ctx.strength.accessory_rest_seconds;
        vec![
            accessory(
                "Romanian Deadlift",
                "8",
                rest,
                "Focus on hamstring stretch, 60-70% of deadlift max",
            ),
            accessory(
                "Bulgarian Split Squat",
                "10 each leg",
                rest,
                "Bodyweight or light dumbbells, balance and single-leg strength",
            ),
        ]
    }

    fn deadlift_accessories(&self) -> Vec<Accessory> {
        let rest = self.ctx.strength.accessory_rest_seconds;
        vec![
            accessory(
                "Barbell Row",
                "8",
                rest,
                "70% of deadlift max, focus on upper back thickness",
            ),
            accessory(
                "Face Pulls",
                "15",
                FACE_PULL_REST_SECONDS,
                "Light weight, rear delt and rotator cuff health",
            ),
        ]
    }
}

fn accessory(name: &str, reps: &str, rest_seconds: u32, notes: &str) -> Accessory {
    Accessory {
        name: name.to_string(),
        sets: 3,
        reps: reps.to_string(),
        rest_seconds,
        notes: notes.to_string(),
    }
}

fn endurance_content(role: EnduranceRole) -> (&'static str, Vec<WorkoutPhase>) {
    match role {
        EnduranceRole::Interval => (
            "Build maximum aerobic capacity with short, intense efforts.",
            vec![
                WorkoutPhase::new("warmup", "15 min easy"),
                WorkoutPhase::new("main_set", "5 x 5min @ Zone 5 (105-120% FTP)"),
                WorkoutPhase::new("recovery", "3 min easy between intervals"),
                WorkoutPhase::new("cooldown", "10 min easy"),
            ],
        ),
        EnduranceRole::Tempo => (
            "Build threshold power with sustained efforts at the upper edge of comfort.",
            vec![
                WorkoutPhase::new("warmup", "15 min easy"),
                WorkoutPhase::new("main_set", "3 x 15min @ Zone 3 (85-95% FTP)"),
                WorkoutPhase::new("recovery", "5 min easy between efforts"),
                WorkoutPhase::new("cooldown", "10 min easy"),
            ],
        ),
        EnduranceRole::Recovery => (
            "Very light movement to promote blood flow and recovery. Should feel refreshing, not tiring.",
            vec![
                WorkoutPhase::new("effort", "Zone 1 only (<65% FTP)"),
                WorkoutPhase::new("cadence", "High cadence (90-100 rpm), very low resistance"),
                WorkoutPhase::new("focus", "Active recovery, not training stress"),
            ],
        ),
        EnduranceRole::Long => (
            "Long steady session for aerobic base development. Practice nutrition and pacing.",
            vec![
                WorkoutPhase::new("effort", "Zone 2 steady (65-75% FTP)"),
                WorkoutPhase::new("nutrition", "Practice race nutrition every 30-45 minutes"),
                WorkoutPhase::new("focus", "Aerobic endurance, fat oxidation, mental resilience"),
            ],
        ),
        EnduranceRole::Base => (
            "Steady aerobic base work to accumulate volume without excess fatigue.",
            vec![
                WorkoutPhase::new("effort", "Zone 2 steady (65-75% FTP)"),
                WorkoutPhase::new("focus", "Conversational pace, aerobic development"),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::tests::sample_profile;

    #[test]
    fn test_durations_for_ten_hours() {
        let durations = SessionDurations::from_weekly_hours(10.0, 60);
        assert_eq!(durations.long, 120);
        assert_eq!(durations.interval, 75);
        assert_eq!(durations.tempo, 75);
        assert_eq!(durations.recovery, 45);
        assert_eq!(durations.base, 264);
        assert_eq!(durations.strength, 60);
    }

    #[test]
    fn test_base_volume_split_by_hour_tier() {
        assert_eq!(base_session_count(8.0), 1);
        assert_eq!(base_session_count(10.0), 1);
        assert_eq!(base_session_count(11.0), 2);
        assert_eq!(base_session_count(12.0), 2);
        assert_eq!(base_session_count(13.0), 3);

        // 11h: easy 422.4, long 132, two sessions share 290.4
        assert_eq!(SessionDurations::from_weekly_hours(11.0, 60).base, 145);
        // 13h: easy 499.2, long 156, three sessions share 343.2
        assert_eq!(SessionDurations::from_weekly_hours(13.0, 60).base, 114);
    }

    #[test]
    fn test_volume_targets_partition_weekly_minutes() {
        for tenths in 5..=250 {
            let hours = f64::from(tenths) / 10.0;
            let targets = VolumeTargets::from_weekly_hours(hours);
            let total = hours * 60.0;

            let split = i64::from(targets.easy_minutes + targets.hard_minutes);
            assert!((split - i64::from(targets.endurance_minutes)).abs() <= 1);

            let sum = f64::from(targets.endurance_minutes + targets.strength_minutes);
            assert!((sum - total).abs() <= 2.0, "hours={hours}");
        }

        let targets = VolumeTargets::from_weekly_hours(10.0);
        assert_eq!(
            targets,
            VolumeTargets {
                endurance_minutes: 480,
                strength_minutes: 120,
                easy_minutes: 384,
                hard_minutes: 96,
            }
        );
    }

    #[test]
    fn test_endurance_session_content_and_ledger() {
        let profile = sample_profile();
        let ctx = PlanningContext::new(&profile, MesocycleWeek::FIRST);
        let builder = SessionBuilder::new(&ctx);
        let mut ledger = MinuteLedger::default();

        let intervals = builder.endurance(EnduranceRole::Interval, &mut ledger);
        assert_eq!(intervals.name, "VO2max Intervals");
        assert_eq!(intervals.duration_min, 75);
        assert!(!intervals.is_easy);
        assert_eq!(intervals.modality, "Cycling");
        assert_eq!(intervals.metric_value, Some(250.0));
        let structure = intervals.workout_structure.unwrap();
        assert_eq!(structure[1].detail, "5 x 5min @ Zone 5 (105-120% FTP)");

        let long = builder.endurance(EnduranceRole::Long, &mut ledger);
        assert!(long.is_easy);
        assert!(long.description.contains("Practice nutrition"));

        assert_eq!(ledger, MinuteLedger { easy: 120, hard: 75, strength: 0 });
    }

    #[test]
    fn test_squat_day_lifts_and_accessories() {
        let profile = sample_profile();
        let ctx = PlanningContext::new(&profile, MesocycleWeek::new(3));
        let builder = SessionBuilder::new(&ctx);
        let mut ledger = MinuteLedger::default();

        let session = builder.strength(StrengthFocus::Squat, &mut ledger);
        assert_eq!(session.name, "Strength: Squat Focus");
        assert_eq!(session.duration_min, 60);
        assert_eq!(session.training_week, 3);

        let primary = session.main_lifts.primary.unwrap();
        assert_eq!(primary.exercise_name, "Back Squat");
        assert_eq!(primary.working_sets.sets, 4);
        assert_eq!(primary.working_sets.weight_kg, 105.0);

        let secondary = session.main_lifts.secondary.unwrap();
        assert_eq!(secondary.exercise_name, "Overhead Press");
        assert_eq!(secondary.working_sets.sets, 3);
        assert_eq!(secondary.working_sets.weight_kg, 45.0);

        let names: Vec<&str> = session.accessory_work.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Romanian Deadlift", "Bulgarian Split Squat"]);
        assert_eq!(session.accessory_work[1].reps, "10 each leg");
        assert_eq!(ledger.strength, 60);
    }

    #[test]
    fn test_deadlift_day_estimates_bench_from_press() {
        let profile = sample_profile();
        let ctx = PlanningContext::new(&profile, MesocycleWeek::FIRST);
        let builder = SessionBuilder::new(&ctx);
        let mut ledger = MinuteLedger::default();

        let session = builder.strength(StrengthFocus::Deadlift, &mut ledger);
        let primary = session.main_lifts.primary.unwrap();
        assert_eq!(primary.exercise_name, "Deadlift");
        assert_eq!(primary.working_sets.sets, 3);
        assert_eq!(primary.working_sets.weight_kg, 117.0);

        let bench = session.main_lifts.secondary.unwrap();
        assert_eq!(bench.exercise_name, "Bench Press");
        assert_eq!(bench.one_rep_max, 78.0);
        assert_eq!(bench.working_sets.weight_kg, 50.7);

        assert_eq!(session.accessory_work[1].name, "Face Pulls");
        assert_eq!(session.accessory_work[1].rest_seconds, 60);
        assert_eq!(session.accessory_work[0].rest_seconds, 90);
    }

    #[test]
    fn test_strength_without_maxes_still_costs_full_session() {
        let mut profile = sample_profile();
        profile.maxes = Default::default();
        let ctx = PlanningContext::new(&profile, MesocycleWeek::FIRST);
        let builder = SessionBuilder::new(&ctx);
        let mut ledger = MinuteLedger::default();

        let session = builder.strength(StrengthFocus::Deadlift, &mut ledger);
        assert_eq!(session.main_lifts, MainLifts::default());
        assert_eq!(session.accessory_work.len(), 2);
        assert_eq!(session.duration_min, 60);
        assert_eq!(ledger.strength, 60);
    }
}
