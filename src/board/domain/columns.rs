//! Column projection of a user's tasks.

use serde::{Deserialize, Serialize};

use super::{KanbanTask, OrderIndex, TaskStatus};

/// Reference to a slot on the board: a column and a position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRef {
    /// Column named by its status.
    pub status: TaskStatus,
    /// Zero-based position within the column.
    pub index: usize,
}

impl ColumnRef {
    /// Creates a slot reference.
    #[must_use]
    pub const fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// A user's tasks grouped into the three board columns.
///
/// Within each column tasks are ordered by rank ascending; tasks sharing a
/// rank keep the order in which the repository returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumns {
    todo: Vec<KanbanTask>,
    in_progress: Vec<KanbanTask>,
    done: Vec<KanbanTask>,
}

impl BoardColumns {
    /// Projects a flat task list into columns.
    ///
    /// Partitioning is by status and each column is sorted by rank with a
    /// stable sort, so equal ranks preserve the input order.
    #[must_use]
    pub fn project(tasks: Vec<KanbanTask>) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            columns.column_mut(task.status()).push(task);
        }
        for status in TaskStatus::ALL {
            columns
                .column_mut(status)
                .sort_by_key(KanbanTask::order_index);
        }
        columns
    }

    /// Returns the tasks of one column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[KanbanTask] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the todo column.
    #[must_use]
    pub fn todo(&self) -> &[KanbanTask] {
        &self.todo
    }

    /// Returns the in-progress column.
    #[must_use]
    pub fn in_progress(&self) -> &[KanbanTask] {
        &self.in_progress
    }

    /// Returns the done column.
    #[must_use]
    pub fn done(&self) -> &[KanbanTask] {
        &self.done
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo
            .len()
            .saturating_add(self.in_progress.len())
            .saturating_add(self.done.len())
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.in_progress.is_empty() && self.done.is_empty()
    }

    /// Returns the task occupying a slot, if the slot exists.
    #[must_use]
    pub fn task_at(&self, slot: ColumnRef) -> Option<&KanbanTask> {
        self.column(slot.status).get(slot.index)
    }

    /// Removes and returns the task at a slot.
    ///
    /// Returns `None` and leaves the board untouched when the slot is out
    /// of range. Callers settle the affected columns afterwards.
    pub fn remove_at(&mut self, slot: ColumnRef) -> Option<KanbanTask> {
        let column = self.column_mut(slot.status);
        if slot.index < column.len() {
            Some(column.remove(slot.index))
        } else {
            None
        }
    }

    /// Inserts a task at a slot, clamping the position to the column end.
    ///
    /// Callers settle the affected columns afterwards.
    pub fn insert_at(&mut self, slot: ColumnRef, task: KanbanTask) {
        let column = self.column_mut(slot.status);
        let at = slot.index.min(column.len());
        column.insert(at, task);
    }

    /// Renumbers one column to consecutive ranks from zero.
    ///
    /// Every task also has its status re-anchored to the column it sits
    /// in. Returns clones of the tasks whose status or rank changed.
    pub fn settle(&mut self, status: TaskStatus) -> Vec<KanbanTask> {
        let column = self.column_mut(status);
        let mut changed = Vec::new();
        for (task, position) in column.iter_mut().zip(0_u32..) {
            let rank = OrderIndex::from(position);
            if task.status() != status || task.order_index() != rank {
                task.place(status, rank);
                changed.push(task.clone());
            }
        }
        changed
    }

    /// Flattens the columns back into a single task list.
    #[must_use]
    pub fn into_tasks(self) -> Vec<KanbanTask> {
        let mut tasks = self.todo;
        tasks.extend(self.in_progress);
        tasks.extend(self.done);
        tasks
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<KanbanTask> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }
}
