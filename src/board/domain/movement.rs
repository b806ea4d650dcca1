//! Two-phase apply for board moves.
//!
//! A drag is applied optimistically: the new column layout is staged in
//! memory first, then either committed once every write lands or rolled
//! back so the caller can re-project the stored board. The [`MoveApply`]
//! state machine keeps those steps in order.

use std::fmt;

use super::{BoardColumns, BoardDomainError, ColumnRef, KanbanTask, TaskId};

/// Lifecycle phase of a board move apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyPhase {
    /// No move has been staged.
    Idle,
    /// A layout is staged and its writes are in flight.
    Pending,
    /// Every write landed; the staged layout is authoritative.
    Committed,
    /// A write failed; the staged layout was discarded.
    RolledBack,
}

impl ApplyPhase {
    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Committed => "committed",
            Self::RolledBack => "rolled_back",
        }
    }
}

impl fmt::Display for ApplyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State machine applying one move to a projected board.
///
/// An apply passes through exactly one of two paths:
/// `Idle -> Pending -> Committed` or `Idle -> Pending -> RolledBack`.
/// Staging validates the client's view of the source slot, performs the
/// removal and insertion, and renumbers the touched columns. The tasks
/// whose status or rank changed are exposed through [`MoveApply::changed`]
/// for the caller to persist before committing.
#[derive(Debug, Clone)]
pub struct MoveApply {
    phase: ApplyPhase,
    columns: BoardColumns,
    changed: Vec<KanbanTask>,
}

impl MoveApply {
    /// Wraps a projected board in an idle apply.
    #[must_use]
    pub const fn idle(columns: BoardColumns) -> Self {
        Self {
            phase: ApplyPhase::Idle,
            columns,
            changed: Vec::new(),
        }
    }

    /// Stages a move of `task_id` from `source` to `destination`.
    ///
    /// The touched columns are renumbered to consecutive ranks so a
    /// same-column drag is a pure reorder and a cross-column drag settles
    /// both sides.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::StaleBoardView`] if the source slot does
    /// not hold `task_id`, or [`BoardDomainError::InvalidPhaseTransition`]
    /// if the apply is not idle.
    pub fn stage(
        &mut self,
        task_id: TaskId,
        source: ColumnRef,
        destination: ColumnRef,
    ) -> Result<(), BoardDomainError> {
        self.ensure_phase(ApplyPhase::Idle, ApplyPhase::Pending)?;

        let stale = BoardDomainError::StaleBoardView {
            task_id,
            status: source.status,
            index: source.index,
        };
        let occupant = self.columns.task_at(source).map(KanbanTask::id);
        if occupant != Some(task_id) {
            return Err(stale);
        }
        let Some(task) = self.columns.remove_at(source) else {
            return Err(stale);
        };

        self.columns.insert_at(destination, task);
        let mut changed = self.columns.settle(source.status);
        if destination.status != source.status {
            changed.extend(self.columns.settle(destination.status));
        }

        self.changed = changed;
        self.phase = ApplyPhase::Pending;
        Ok(())
    }

    /// Marks the staged layout as fully persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPhaseTransition`] if no move is
    /// pending.
    pub fn commit(&mut self) -> Result<(), BoardDomainError> {
        self.ensure_phase(ApplyPhase::Pending, ApplyPhase::Committed)?;
        self.phase = ApplyPhase::Committed;
        Ok(())
    }

    /// Abandons the staged layout after a failed write.
    ///
    /// The pending writes are cleared; callers discard the apply and
    /// re-project the stored board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidPhaseTransition`] if no move is
    /// pending.
    pub fn roll_back(&mut self) -> Result<(), BoardDomainError> {
        self.ensure_phase(ApplyPhase::Pending, ApplyPhase::RolledBack)?;
        self.changed.clear();
        self.phase = ApplyPhase::RolledBack;
        Ok(())
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> ApplyPhase {
        self.phase
    }

    /// Returns the staged column layout.
    #[must_use]
    pub const fn columns(&self) -> &BoardColumns {
        &self.columns
    }

    /// Returns the tasks whose status or rank the staged move changed.
    #[must_use]
    pub fn changed(&self) -> &[KanbanTask] {
        &self.changed
    }

    /// Consumes the apply, returning the column layout.
    #[must_use]
    pub fn into_columns(self) -> BoardColumns {
        self.columns
    }

    fn ensure_phase(&self, expected: ApplyPhase, to: ApplyPhase) -> Result<(), BoardDomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(BoardDomainError::InvalidPhaseTransition {
                from: self.phase,
                to,
            })
        }
    }
}
