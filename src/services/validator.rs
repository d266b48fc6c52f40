use crate::models::plan::{DayPlan, Polarization, ValidationReport};
use crate::models::session::DaySession;
use crate::services::lift_block::round_to_tenth;
use crate::services::session_builder::VolumeTargets;

const TARGET_EASY_PCT: u32 = 80;
const TARGET_HARD_PCT: u32 = 20;
const TOLERANCE_MINUTES: f64 = 30.0;
const VOLUME_MARGIN: f64 = 0.05;
const MIN_EASY_RATIO: f64 = 0.75;
const MIN_HARD_RATIO: f64 = 0.15;

/// Sum the assembled week by type and intensity and compare it to targets.
/// Warnings are advisory and never fail the plan.
pub fn validate_plan_volume(
    days: &[DayPlan],
    targets: &VolumeTargets,
    weekly_hours: f64,
) -> ValidationReport {
    let mut endurance = 0u32;
    let mut strength = 0u32;
    let mut easy = 0u32;
    let mut hard = 0u32;

    for (_, session) in days.iter().flat_map(|day| day.sessions()) {
        match session {
            DaySession::Endurance(s) => {
                endurance += s.duration_min;
                if s.is_easy {
                    easy += s.duration_min;
                } else {
                    hard += s.duration_min;
                }
            }
            DaySession::Strength(s) => strength += s.duration_min,
            DaySession::Rest => {}
        }
    }

    let (easy_ratio, hard_ratio) = if endurance > 0 {
        (
            f64::from(easy) / f64::from(endurance),
            f64::from(hard) / f64::from(endurance),
        )
    } else {
        (0.0, 0.0)
    };

    let target_minutes = weekly_hours * 60.0;
    let actual_minutes = f64::from(endurance + strength);

    ValidationReport {
        target_total_hours: weekly_hours,
        actual_total_hours: round_to_tenth(actual_minutes / 60.0),
        target_endurance_min: targets.endurance_minutes,
        actual_endurance_min: endurance,
        target_strength_min: targets.strength_minutes,
        actual_strength_min: strength,
        easy_min: easy,
        hard_min: hard,
        polarization: Polarization {
            target_easy_pct: TARGET_EASY_PCT,
            actual_easy_pct: whole_percent(easy_ratio),
            target_hard_pct: TARGET_HARD_PCT,
            actual_hard_pct: whole_percent(hard_ratio),
        },
        within_tolerance: (actual_minutes - target_minutes).abs() < TOLERANCE_MINUTES,
        warnings: volume_warnings(actual_minutes, target_minutes, easy_ratio, hard_ratio),
    }
}

fn volume_warnings(
    actual_minutes: f64,
    target_minutes: f64,
    easy_ratio: f64,
    hard_ratio: f64,
) -> Vec<String> {
    let mut warnings = Vec::new();
    let hard_pct = whole_percent(hard_ratio);

    if actual_minutes < target_minutes * (1.0 - VOLUME_MARGIN) {
        warnings.push(format!(
            "Plan is {:.0}min under target. Consider adding easy volume.",
            target_minutes - actual_minutes
        ));
    } else if actual_minutes > target_minutes * (1.0 + VOLUME_MARGIN) {
        warnings.push(format!(
            "Plan is {:.0}min over target. Risk of overtraining.",
            actual_minutes - target_minutes
        ));
    }

    if easy_ratio < MIN_EASY_RATIO {
        warnings.push(format!(
            "Too much high-intensity work ({}%). Risk of burnout. Target is 80/20.",
            hard_pct
        ));
    }

    if hard_ratio < MIN_HARD_RATIO {
        warnings.push(format!(
            "Insufficient high-intensity work ({}%). May limit performance gains.",
            hard_pct
        ));
    }

    warnings
}

fn whole_percent(ratio: f64) -> u32 {
    (ratio * 100.0 + 1e-9).floor() as u32
}
