use quest_core::model::TaskId;
use services::TaskStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCardVm {
    pub id: TaskId,
    pub badge: String,
    pub title: String,
    pub description: String,
    pub category: &'static str,
    pub points: u32,
    pub completed: bool,
    pub action_label: &'static str,
}

impl From<&TaskStatus> for TaskCardVm {
    fn from(status: &TaskStatus) -> Self {
        let task = &status.task;
        let badge = if status.completed {
            "✓".to_string()
        } else {
            task.id().to_string()
        };
        Self {
            id: task.id(),
            badge,
            title: task.title().to_string(),
            description: task.description().to_string(),
            category: task.category().as_str(),
            points: task.points(),
            completed: status.completed,
            action_label: if status.completed {
                "Completed"
            } else {
                "Start Task"
            },
        }
    }
}

#[must_use]
pub fn map_task_cards(statuses: &[TaskStatus]) -> Vec<TaskCardVm> {
    statuses.iter().map(TaskCardVm::from).collect()
}
