use chrono::Weekday;
use tracing::{debug, info, warn};

use crate::models::plan::{DayPlan, MesocycleWeek, WEEK, WeeklyPlan};
use crate::models::profile::{AthleteProfile, TrainingTimePref};
use crate::models::session::{DaySession, EnduranceRole, Slot, StrengthFocus};
use crate::services::session_builder::{MinuteLedger, PlanningContext, SessionBuilder};
use crate::services::validator::validate_plan_volume;

/// Above this many weekly hours the squat day gains an AM base session.
const SQUAT_DAY_DOUBLE_HOURS: f64 = 10.0;
/// Above this many weekly hours the deadlift day gains an AM base session.
const DEADLIFT_DAY_DOUBLE_HOURS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRole {
    Rest,
    Endurance(EnduranceRole),
    Strength {
        focus: StrengthFocus,
        with_base: bool,
    },
}

/// Days after the rest day, so the rest day itself is offset 0.
pub fn day_offset(day: Weekday, rest_day: Weekday) -> u8 {
    ((day.num_days_from_monday() + 7 - rest_day.num_days_from_monday()) % 7) as u8
}

pub fn role_for_offset(offset: u8, weekly_hours: f64) -> DayRole {
    match offset % 7 {
        0 => DayRole::Rest,
        1 => DayRole::Endurance(EnduranceRole::Long),
        2 => DayRole::Strength {
            focus: StrengthFocus::Squat,
            with_base: weekly_hours > SQUAT_DAY_DOUBLE_HOURS,
        },
        3 => DayRole::Endurance(EnduranceRole::Interval),
        4 => DayRole::Strength {
            focus: StrengthFocus::Deadlift,
            with_base: weekly_hours > DEADLIFT_DAY_DOUBLE_HOURS,
        },
        5 => DayRole::Endurance(EnduranceRole::Tempo),
        _ => DayRole::Endurance(EnduranceRole::Recovery),
    }
}

pub fn generate_weekly_plan(profile: &AthleteProfile, week: MesocycleWeek) -> WeeklyPlan {
    let ctx = PlanningContext::new(profile, week);
    assemble_week(&ctx)
}

pub fn assemble_week(ctx: &PlanningContext<'_>) -> WeeklyPlan {
    let profile = ctx.profile;
    let builder = SessionBuilder::new(ctx);
    let mut ledger = MinuteLedger::default();

    let days: Vec<DayPlan> = WEEK
        .iter()
        .map(|&day| {
            let role = role_for_offset(day_offset(day, profile.rest_day), profile.weekly_hours);
            let plan = assemble_day(&builder, day, role, profile.time_pref, &mut ledger);
            debug!(day = %day, role = ?role, "plan.day_assembled");
            plan
        })
        .collect();

    debug!(
        easy_min = ledger.easy,
        hard_min = ledger.hard,
        strength_min = ledger.strength,
        "plan.volume_accumulated"
    );

    let validation = validate_plan_volume(&days, &ctx.targets, profile.weekly_hours);

    for warning in &validation.warnings {
        warn!(warning = %warning, "plan.volume_warning");
    }

    info!(
        rest_day = %profile.rest_day,
        mesocycle_week = ctx.week.get(),
        total_min = ledger.total(),
        warning_count = validation.warnings.len(),
        "plan.generated"
    );

    WeeklyPlan {
        mesocycle_week: ctx.week,
        days,
        validation,
    }
}

fn assemble_day(
    builder: &SessionBuilder<'_>,
    day: Weekday,
    role: DayRole,
    time_pref: TrainingTimePref,
    ledger: &mut MinuteLedger,
) -> DayPlan {
    let single = |session: DaySession| match time_pref.single_session_slot() {
        Slot::Am => DayPlan {
            day,
            am: Some(session),
            pm: None,
        },
        Slot::Pm => DayPlan {
            day,
            am: None,
            pm: Some(session),
        },
    };

    match role {
        DayRole::Rest => DayPlan::rest(day),
        DayRole::Endurance(role) => single(DaySession::Endurance(builder.endurance(role, ledger))),
        DayRole::Strength {
            focus,
            with_base: true,
        } => {
            let base = builder.endurance(EnduranceRole::Base, ledger);
            let strength = builder.strength(focus, ledger);
            DayPlan {
                day,
                am: Some(DaySession::Endurance(base)),
                pm: Some(DaySession::Strength(strength)),
            }
        }
        DayRole::Strength {
            focus,
            with_base: false,
        } => single(DaySession::Strength(builder.strength(focus, ledger))),
    }
}
