use uuid::Uuid;

use crate::error::BoardError;
use crate::models::{Priority, Task, TaskDraft, TaskStatus, TeamMember};

/// A status bucket. Invariant: every task it holds has
/// `task.status == column.status`.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

impl Column {
    fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }
}

/// The in-memory board: four fixed columns, one per status, in display
/// order. All mutation goes through the operations below, which keep the
/// column/status invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: [Column; 4],
}

impl Board {
    pub fn new() -> Self {
        Self {
            columns: [
                Column::new(TaskStatus::Open),
                Column::new(TaskStatus::InProgress),
                Column::new(TaskStatus::InReview),
                Column::new(TaskStatus::Done),
            ],
        }
    }

    /// Demo board: five tasks spread across the four columns, one roster
    /// member each.
    pub fn with_demo_tasks(team: &[TeamMember]) -> Self {
        let mut board = Self::new();
        let start = seed_date(2024, 1, 15);
        let end = seed_date(2024, 1, 22);
        let seeds = [
            (
                "task-1",
                "Implement user authentication",
                "Add OAuth2 integration with Google and GitHub",
                TaskStatus::Open,
                Priority::High,
                0,
            ),
            (
                "task-2",
                "Design system update",
                "Update color scheme and typography",
                TaskStatus::Open,
                Priority::Medium,
                1,
            ),
            (
                "task-3",
                "API optimization",
                "Improve response time for main endpoints",
                TaskStatus::InProgress,
                Priority::High,
                2,
            ),
            (
                "task-4",
                "Mobile responsiveness",
                "Fix layout issues on small screens",
                TaskStatus::InReview,
                Priority::Low,
                3,
            ),
            (
                "task-5",
                "Setup CI/CD pipeline",
                "Configure GitHub Actions workflow",
                TaskStatus::Done,
                Priority::Medium,
                4,
            ),
        ];
        for (id, title, description, status, priority, member) in seeds {
            if let Some(assignee) = team.get(member).cloned() {
                board.column_mut(status).tasks.push(Task {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    status,
                    assignee,
                    priority,
                    start_date: start,
                    end_date: end,
                });
            }
        }
        board
    }

    /// Read-only view of the columns in fixed order:
    /// open, in-progress, in-review, done.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[status.index()]
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        &mut self.columns[status.index()]
    }

    /// Validates the draft, assigns a fresh unique id, and appends the new
    /// task to the end of the column matching the draft's status. Returns
    /// the created task. On error the board is unchanged.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<Task, BoardError> {
        draft.validate()?;
        let task = draft.into_task(format!("task-{}", Uuid::new_v4()));
        self.column_mut(task.status).tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces the task with the same id wherever it sits. If the status
    /// is unchanged the record keeps its position in its column; if the
    /// caller changed the status, the task relocates to the end of the
    /// matching column so column membership and status stay in agreement.
    pub fn update_task(&mut self, updated: Task) -> Result<(), BoardError> {
        updated.validate()?;
        let location = self
            .columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column
                    .tasks
                    .iter()
                    .position(|t| t.id == updated.id)
                    .map(|task_index| (column_index, task_index))
            });
        let (column_index, task_index) = match location {
            Some(location) => location,
            None => return Err(BoardError::NotFound(updated.id)),
        };
        if self.columns[column_index].status == updated.status {
            self.columns[column_index].tasks[task_index] = updated;
        } else {
            self.columns[column_index].tasks.remove(task_index);
            let target = updated.status;
            self.column_mut(target).tasks.push(updated);
        }
        Ok(())
    }

    /// Moves a task from the source column to the end of the target column
    /// and restamps its status. Tolerant by design: a same-column move, an
    /// unknown column id, or a task missing from the claimed source column
    /// (a stale drag source) is a silent no-op.
    pub fn move_task(&mut self, task_id: &str, source_column_id: &str, target_column_id: &str) {
        if source_column_id == target_column_id {
            return;
        }
        let source = match TaskStatus::from_id(source_column_id) {
            Some(status) => status,
            None => return,
        };
        let target = match TaskStatus::from_id(target_column_id) {
            Some(status) => status,
            None => return,
        };
        let source_column = self.column_mut(source);
        let position = match source_column.tasks.iter().position(|t| t.id == task_id) {
            Some(position) => position,
            None => return,
        };
        let mut task = source_column.tasks.remove(position);
        task.status = target;
        self.column_mut(target).tasks.push(task);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::team_members;
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::collections::HashSet;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn seeded() -> Board {
        Board::with_demo_tasks(&team_members())
    }

    fn draft(title: &str, status: TaskStatus) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "Walk through the open questions".to_string(),
            status,
            assignee: team_members().remove(0),
            priority: Priority::Low,
            start_date: date("2024-02-01"),
            end_date: date("2024-02-05"),
        }
    }

    fn task_ids(board: &Board, status: TaskStatus) -> Vec<String> {
        board
            .column(status)
            .tasks
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    fn assert_columns_agree_with_statuses(board: &Board) {
        for column in board.columns() {
            for task in &column.tasks {
                assert_eq!(
                    task.status, column.status,
                    "task {} sits in the {} column",
                    task.id,
                    column.status.as_id()
                );
            }
        }
    }

    #[test]
    fn demo_board_lays_out_five_tasks_across_columns() {
        let board = seeded();
        let ids: Vec<&str> = board.columns().iter().map(|c| c.status.as_id()).collect();
        assert_eq!(ids, vec!["open", "in-progress", "in-review", "done"]);
        assert_eq!(task_ids(&board, TaskStatus::Open), vec!["task-1", "task-2"]);
        assert_eq!(task_ids(&board, TaskStatus::InProgress), vec!["task-3"]);
        assert_eq!(task_ids(&board, TaskStatus::InReview), vec!["task-4"]);
        assert_eq!(task_ids(&board, TaskStatus::Done), vec!["task-5"]);
        assert_columns_agree_with_statuses(&board);
    }

    #[test]
    fn create_appends_to_the_end_of_the_matching_column() {
        let mut board = seeded();
        let created = board
            .create_task(draft("Spec review", TaskStatus::Open))
            .unwrap();

        let open = &board.column(TaskStatus::Open).tasks;
        assert_eq!(open.len(), 3);
        let last = open.last().unwrap();
        assert_eq!(last, &created);
        assert_eq!(last.title, "Spec review");
        assert_eq!(last.status, TaskStatus::Open);
        assert_eq!(last.assignee.name, "Sarah Chen");
        assert_eq!(last.priority, Priority::Low);
        assert_eq!(last.start_date, date("2024-02-01"));
        assert_eq!(last.end_date, date("2024-02-05"));
        assert!(!last.id.is_empty());
        assert_ne!(last.id, "task-1");
        assert_columns_agree_with_statuses(&board);
    }

    #[test]
    fn created_ids_never_collide() {
        let mut board = seeded();
        let mut ids = HashSet::new();
        for column in board.columns() {
            for task in &column.tasks {
                ids.insert(task.id.clone());
            }
        }
        let seed_count = ids.len();
        for round in 0..25 {
            for status in TaskStatus::all() {
                let created = board
                    .create_task(draft(&format!("Task {round}"), status))
                    .unwrap();
                assert!(ids.insert(created.id), "duplicate id handed out");
            }
        }
        assert_eq!(ids.len(), seed_count + 100);
    }

    #[test]
    fn create_rejects_end_before_start_and_leaves_board_unchanged() {
        let mut board = seeded();
        let before = board.clone();
        let mut bad = draft("Spec review", TaskStatus::Open);
        bad.start_date = date("2024-02-05");
        bad.end_date = date("2024-02-01");

        let result = board.create_task(bad);
        assert!(matches!(
            result,
            Err(BoardError::Validation(ValidationError::EndBeforeStart { .. }))
        ));
        assert_eq!(board, before);
    }

    #[rstest]
    #[case::blank_title("  ", "Walk through the open questions", "title")]
    #[case::blank_description("Spec review", "", "description")]
    fn create_rejects_blank_required_fields(
        #[case] title: &str,
        #[case] description: &str,
        #[case] field: &'static str,
    ) {
        let mut board = seeded();
        let before = board.clone();
        let mut bad = draft(title, TaskStatus::Open);
        bad.description = description.to_string();

        assert_eq!(
            board.create_task(bad),
            Err(BoardError::Validation(ValidationError::EmptyField(field)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_reassigns_status_and_appends_to_target() {
        let mut board = seeded();
        board.move_task("task-3", "in-progress", "done");

        assert!(task_ids(&board, TaskStatus::InProgress).is_empty());
        assert_eq!(
            task_ids(&board, TaskStatus::Done),
            vec!["task-5", "task-3"]
        );
        let moved = board.column(TaskStatus::Done).tasks.last().unwrap();
        assert_eq!(moved.status, TaskStatus::Done);
        assert_columns_agree_with_statuses(&board);
    }

    #[test]
    fn move_out_of_done_is_allowed() {
        let mut board = seeded();
        board.move_task("task-5", "done", "open");

        assert!(task_ids(&board, TaskStatus::Done).is_empty());
        assert_eq!(
            task_ids(&board, TaskStatus::Open),
            vec!["task-1", "task-2", "task-5"]
        );
        assert_columns_agree_with_statuses(&board);
    }

    #[test]
    fn move_to_the_same_column_is_a_noop() {
        let mut board = seeded();
        let before = board.clone();
        board.move_task("task-1", "open", "open");
        assert_eq!(board, before);
    }

    #[rstest]
    #[case::unknown_task("task-999", "open", "done")]
    #[case::unknown_source_column("task-3", "backlog", "done")]
    #[case::unknown_target_column("task-3", "in-progress", "archived")]
    #[case::task_not_in_claimed_source("task-3", "open", "done")]
    fn stale_moves_leave_the_board_unchanged(
        #[case] task_id: &str,
        #[case] source: &str,
        #[case] target: &str,
    ) {
        let mut board = seeded();
        let before = board.clone();
        board.move_task(task_id, source, target);
        assert_eq!(board, before);
    }

    #[test]
    fn update_replaces_the_record_in_place() {
        let mut board = seeded();
        let mut edited = board.column(TaskStatus::Open).tasks[0].clone();
        edited.description = "Add OAuth2, SSO is out of scope".to_string();

        board.update_task(edited.clone()).unwrap();

        assert_eq!(task_ids(&board, TaskStatus::Open), vec!["task-1", "task-2"]);
        let stored = &board.column(TaskStatus::Open).tasks[0];
        assert_eq!(stored, &edited);
        assert_columns_agree_with_statuses(&board);
    }

    #[test]
    fn update_relocates_when_the_status_changes() {
        let mut board = seeded();
        let mut edited = board.column(TaskStatus::Open).tasks[0].clone();
        edited.status = TaskStatus::Done;

        board.update_task(edited).unwrap();

        assert_eq!(task_ids(&board, TaskStatus::Open), vec!["task-2"]);
        assert_eq!(
            task_ids(&board, TaskStatus::Done),
            vec!["task-5", "task-1"]
        );
        assert_columns_agree_with_statuses(&board);
    }

    #[test]
    fn update_of_an_unknown_id_is_not_found() {
        let mut board = seeded();
        let before = board.clone();
        let mut ghost = board.column(TaskStatus::Open).tasks[0].clone();
        ghost.id = "task-999".to_string();

        assert_eq!(
            board.update_task(ghost),
            Err(BoardError::NotFound("task-999".to_string()))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn update_rejects_invalid_dates_and_leaves_board_unchanged() {
        let mut board = seeded();
        let before = board.clone();
        let mut edited = board.column(TaskStatus::Open).tasks[0].clone();
        edited.start_date = date("2024-03-01");
        edited.end_date = date("2024-02-01");

        assert!(matches!(
            board.update_task(edited),
            Err(BoardError::Validation(ValidationError::EndBeforeStart { .. }))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn columns_and_statuses_agree_after_a_mixed_sequence() {
        let mut board = seeded();
        let created = board
            .create_task(draft("Spec review", TaskStatus::InReview))
            .unwrap();
        board.move_task(&created.id, "in-review", "in-progress");
        board.move_task("task-1", "open", "done");

        let mut edited = board.column(TaskStatus::Done).tasks[0].clone();
        edited.status = TaskStatus::Open;
        board.update_task(edited).unwrap();

        board.move_task("task-999", "open", "done");
        board.move_task("task-2", "open", "open");

        assert_columns_agree_with_statuses(&board);
        let total: usize = board.columns().iter().map(|c| c.tasks.len()).sum();
        assert_eq!(total, 6);
    }
}
