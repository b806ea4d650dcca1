//! Service layer for board projection and drag moves.

use crate::account::domain::UserId;
use crate::board::{
    domain::{ApplyPhase, BoardColumns, BoardDomainError, ColumnRef, MoveApply, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for moving a task between board slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    user_id: UserId,
    task_id: TaskId,
    source: ColumnRef,
    destination: Option<ColumnRef>,
}

impl MoveTaskRequest {
    /// Creates a request with no destination, as for a drop outside any
    /// column.
    #[must_use]
    pub const fn new(user_id: UserId, task_id: TaskId, source: ColumnRef) -> Self {
        Self {
            user_id,
            task_id,
            source,
            destination: None,
        }
    }

    /// Sets the destination slot.
    #[must_use]
    pub const fn with_destination(mut self, destination: ColumnRef) -> Self {
        self.destination = Some(destination);
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Outcome of a move request.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// The drop had no destination; the board is unchanged.
    Ignored {
        /// Projection of the stored board.
        board: BoardColumns,
    },
    /// Every write landed; the staged layout is now authoritative.
    Committed {
        /// The committed board layout.
        board: BoardColumns,
    },
    /// A write failed part-way; the stored board was re-projected.
    RolledBack {
        /// Projection of the stored board after the failed apply.
        board: BoardColumns,
        /// The write failure that forced the rollback.
        error: TaskRepositoryError,
    },
}

impl MoveOutcome {
    /// Returns the board layout carried by the outcome.
    #[must_use]
    pub const fn board(&self) -> &BoardColumns {
        match self {
            Self::Ignored { board } | Self::Committed { board } => board,
            Self::RolledBack { board, .. } => board,
        }
    }

    /// Returns the apply phase the move finished in.
    ///
    /// An ignored drop never left [`ApplyPhase::Idle`].
    #[must_use]
    pub const fn phase(&self) -> ApplyPhase {
        match self {
            Self::Ignored { .. } => ApplyPhase::Idle,
            Self::Committed { .. } => ApplyPhase::Committed,
            Self::RolledBack { .. } => ApplyPhase::RolledBack,
        }
    }

    /// Consumes the outcome, returning the board layout.
    #[must_use]
    pub fn into_board(self) -> BoardColumns {
        match self {
            Self::Ignored { board } | Self::Committed { board } => board,
            Self::RolledBack { board, .. } => board,
        }
    }
}

/// Board projection and move orchestration service.
#[derive(Clone)]
pub struct BoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> BoardService<R>
where
    R: TaskRepository,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Projects the user's stored tasks into board columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the listing fails.
    pub async fn load_board(&self, user_id: UserId) -> BoardServiceResult<BoardColumns> {
        let tasks = self.repository.list_for_user(user_id).await?;
        Ok(BoardColumns::project(tasks))
    }

    /// Applies a drag to the user's board.
    ///
    /// A request without a destination is ignored and returns the current
    /// board. Otherwise the move is staged against a fresh projection, the
    /// changed tasks are written one by one, and the apply is committed.
    /// The first failed write rolls the apply back and the stored board is
    /// re-projected, so a part-written column is never presented as
    /// committed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the request's view of the
    /// source slot is stale, or [`BoardServiceError::Repository`] when the
    /// board cannot be loaded. Write failures during the apply are not
    /// errors; they surface as [`MoveOutcome::RolledBack`].
    pub async fn move_task(&self, request: MoveTaskRequest) -> BoardServiceResult<MoveOutcome> {
        let MoveTaskRequest {
            user_id,
            task_id,
            source,
            destination,
        } = request;

        let board = self.load_board(user_id).await?;
        let Some(target) = destination else {
            return Ok(MoveOutcome::Ignored { board });
        };

        let mut apply = MoveApply::idle(board);
        apply.stage(task_id, source, target)?;

        let pending = apply.changed().to_vec();
        for task in &pending {
            if let Err(error) = self.repository.update(task).await {
                apply.roll_back()?;
                let reloaded = self.load_board(user_id).await?;
                return Ok(MoveOutcome::RolledBack {
                    board: reloaded,
                    error,
                });
            }
        }

        apply.commit()?;
        Ok(MoveOutcome::Committed {
            board: apply.into_columns(),
        })
    }
}
