use services::TaskStatus;

/// One line of the performance summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub title: String,
    pub completed: bool,
    pub badge: String,
}

#[must_use]
pub fn map_result_rows(statuses: &[TaskStatus]) -> Vec<ResultRowVm> {
    statuses
        .iter()
        .map(|status| ResultRowVm {
            title: status.task.title().to_string(),
            completed: status.completed,
            badge: if status.completed {
                format!("{} pts", status.task.points())
            } else {
                "Pending".to_string()
            },
        })
        .collect()
}
