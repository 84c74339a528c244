//! Pure aggregation over a workout snapshot. Both `/api/stats` and the
//! dashboard payload are computed here so the server and the browser always
//! agree on the numbers.

use crate::models::{DashboardResponse, ExerciseFrequency, StatsResponse, WeeklySeries, Workout};
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeMap;

pub fn build_stats(workouts: &[Workout]) -> StatsResponse {
    StatsResponse {
        total_workouts: workouts.len(),
        total_exercises: workouts.iter().map(|w| w.exercises.len()).sum(),
        total_weight: total_volume(workouts),
        average_workouts_per_week: average_workouts_per_week(workouts),
        most_frequent_exercise: most_frequent_exercise(workouts),
    }
}

pub fn build_dashboard(workouts: &[Workout]) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), workouts)
}

pub fn build_dashboard_at(today: NaiveDate, workouts: &[Workout]) -> DashboardResponse {
    DashboardResponse {
        total_workouts: workouts.len(),
        workouts_this_week: workouts_this_week(today, workouts),
        current_streak: current_streak(today, workouts),
        total_calories: workouts.iter().map(|w| w.calories).sum(),
        weekly: weekly_series(workouts),
    }
}

/// Total training volume: sets x reps x weight summed over every entry.
/// Missing numerics are already zero at the model boundary.
pub fn total_volume(workouts: &[Workout]) -> f64 {
    workouts
        .iter()
        .flat_map(|w| &w.exercises)
        .map(|entry| f64::from(entry.sets) * f64::from(entry.reps) * entry.weight)
        .sum()
}

/// Workouts per week over the logged span, rounded to two decimals. The span
/// is `ceil(days / 7)` weeks, floored at one so a single-day log divides by 1.
/// Workouts with unparseable dates are skipped.
pub fn average_workouts_per_week(workouts: &[Workout]) -> f64 {
    let mut dates = parsed_dates(workouts);
    dates.sort_unstable();
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return 0.0;
    };

    let span_days = (*last - *first).num_days();
    let weeks = ((span_days + 6) / 7).max(1);
    let average = dates.len() as f64 / weeks as f64;
    (average * 100.0).round() / 100.0
}

/// Tallies entry names across all workouts. Ties go to the name encountered
/// first; an empty log yields `None`.
pub fn most_frequent_exercise(workouts: &[Workout]) -> Option<ExerciseFrequency> {
    let mut tally: Vec<(String, u64)> = Vec::new();
    for entry in workouts.iter().flat_map(|w| &w.exercises) {
        match tally.iter_mut().find(|(name, _)| *name == entry.name) {
            Some((_, count)) => *count += 1,
            None => tally.push((entry.name.clone(), 1)),
        }
    }

    let mut best: Option<(String, u64)> = None;
    for (name, count) in tally {
        let beaten = best.as_ref().is_some_and(|(_, top)| *top >= count);
        if !beaten {
            best = Some((name, count));
        }
    }
    best.map(|(name, count)| ExerciseFrequency { name, count })
}

/// ISO-8601 week label, e.g. `2024-W01`.
pub fn week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Buckets workouts by week key and emits the three parallel chart sequences
/// in ascending key order. An empty log gets a single "no data" placeholder.
pub fn weekly_series(workouts: &[Workout]) -> WeeklySeries {
    let mut buckets: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    for workout in workouts {
        let Ok(date) = workout.date.parse::<NaiveDate>() else {
            continue;
        };
        let bucket = buckets.entry(week_key(date)).or_default();
        bucket.0 += 1;
        bucket.1 += workout.calories;
    }

    if buckets.is_empty() {
        return WeeklySeries {
            labels: vec!["no data".to_string()],
            workouts: vec![0],
            calories: vec![0],
        };
    }

    let mut series = WeeklySeries {
        labels: Vec::with_capacity(buckets.len()),
        workouts: Vec::with_capacity(buckets.len()),
        calories: Vec::with_capacity(buckets.len()),
    };
    for (label, (count, calories)) in buckets {
        series.labels.push(label);
        series.workouts.push(count);
        series.calories.push(calories);
    }
    series
}

/// Consecutive calendar days with at least one workout, ending today or
/// yesterday. Duplicate dates within a day collapse; a gap of two or more
/// days breaks the streak.
pub fn current_streak(today: NaiveDate, workouts: &[Workout]) -> u32 {
    let mut dates = parsed_dates(workouts);
    dates.sort_unstable();
    dates.dedup();

    let Some(&latest) = dates.last() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2).rev() {
        if (pair[1] - pair[0]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Workouts dated on or after the most recent Sunday.
pub fn workouts_this_week(today: NaiveDate, workouts: &[Workout]) -> usize {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    workouts
        .iter()
        .filter(|w| {
            w.date
                .parse::<NaiveDate>()
                .is_ok_and(|date| date >= week_start)
        })
        .count()
}

fn parsed_dates(workouts: &[Workout]) -> Vec<NaiveDate> {
    workouts
        .iter()
        .filter_map(|w| w.date.parse().ok())
        .collect()
}
