use quest_core::model::ProgressSummary;

/// Strings and numbers for the progress card and the results tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed_label: String,
    pub fraction_label: String,
    pub percent: u32,
    pub percent_label: String,
    pub points_label: String,
    pub earned_points: u32,
    pub remaining: usize,
    pub is_complete: bool,
}

#[must_use]
pub fn map_progress(summary: &ProgressSummary) -> ProgressVm {
    let percent = summary.percent();
    ProgressVm {
        completed_label: format!(
            "{} of {} tasks completed",
            summary.completed_count, summary.total_count
        ),
        fraction_label: format!("{}/{}", summary.completed_count, summary.total_count),
        percent,
        percent_label: format!("{percent}%"),
        points_label: format!(
            "Total Points: {} / {}",
            summary.earned_points, summary.total_points
        ),
        earned_points: summary.earned_points,
        remaining: summary.remaining(),
        is_complete: summary.is_complete(),
    }
}
