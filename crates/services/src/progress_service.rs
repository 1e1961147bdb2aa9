use std::sync::Arc;

use portal_core::model::{Module, RoleId, UnitId};
use portal_core::progress::{CompletedUnits, completion_percentage};
use storage::repository::ProgressRepository;
use tokio::sync::Mutex;

use crate::error::ProgressError;

/// Result of `ProgressService::mark_complete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Newly recorded and persisted.
    Marked,
    /// Already in the set; nothing was written.
    AlreadyComplete,
}

/// Result of `ProgressService::unmark`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnmarkOutcome {
    Removed,
    NotPresent,
}

/// Result of `ProgressService::toggle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Marked,
    Unmarked,
}

/// Per-role completion tracking over a durable repository.
///
/// Every call reads the stored set fresh; there is no cache, so two
/// services over the same store always agree. Read-modify-write calls on
/// one service (and its clones) run one at a time.
#[derive(Clone)]
pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
    writes: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressRepository>) -> Self {
        Self {
            progress,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Load the completed set of a role.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the backend cannot be read.
    pub async fn completed(&self, role: &RoleId) -> Result<CompletedUnits, ProgressError> {
        Ok(self.progress.load_completed(role).await?)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the backend cannot be read.
    pub async fn is_complete(&self, role: &RoleId, unit: &UnitId) -> Result<bool, ProgressError> {
        Ok(self.completed(role).await?.contains(unit))
    }

    /// Add `unit` to the role's set and persist it.
    ///
    /// Marking an already-complete unit writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the set cannot be read or written.
    pub async fn mark_complete(
        &self,
        role: &RoleId,
        unit: &UnitId,
    ) -> Result<MarkOutcome, ProgressError> {
        let _writes = self.writes.lock().await;
        let mut completed = self.completed(role).await?;
        if !completed.insert(unit.clone()) {
            return Ok(MarkOutcome::AlreadyComplete);
        }
        self.progress.save_completed(role, &completed).await?;
        tracing::debug!(%role, %unit, "unit marked complete");
        Ok(MarkOutcome::Marked)
    }

    /// Remove `unit` from the role's set. Absent units are not an error.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the set cannot be read or written.
    pub async fn unmark(
        &self,
        role: &RoleId,
        unit: &UnitId,
    ) -> Result<UnmarkOutcome, ProgressError> {
        let _writes = self.writes.lock().await;
        let mut completed = self.completed(role).await?;
        if !completed.remove(unit) {
            return Ok(UnmarkOutcome::NotPresent);
        }
        self.progress.save_completed(role, &completed).await?;
        tracing::debug!(%role, %unit, "unit unmarked");
        Ok(UnmarkOutcome::Removed)
    }

    /// Flip the completion state of `unit` in a single read and write.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the set cannot be read or written.
    pub async fn toggle(&self, role: &RoleId, unit: &UnitId) -> Result<ToggleOutcome, ProgressError> {
        let _writes = self.writes.lock().await;
        let mut completed = self.completed(role).await?;
        let outcome = if completed.remove(unit) {
            ToggleOutcome::Unmarked
        } else {
            completed.insert(unit.clone());
            ToggleOutcome::Marked
        };
        self.progress.save_completed(role, &completed).await?;
        tracing::debug!(%role, %unit, ?outcome, "unit toggled");
        Ok(outcome)
    }

    /// Percentage of `total_units` the role has completed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the set cannot be read.
    pub async fn completion_percentage(
        &self,
        role: &RoleId,
        total_units: usize,
    ) -> Result<u8, ProgressError> {
        let completed = self.completed(role).await?;
        Ok(completion_percentage(completed.len(), total_units))
    }

    /// Percentage of `module`'s own units the role has completed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the set cannot be read.
    pub async fn module_percentage(
        &self,
        role: &RoleId,
        module: &Module,
    ) -> Result<u8, ProgressError> {
        let completed = self.completed(role).await?;
        Ok(completion_percentage(
            completed.count_in(module),
            module.unit_count(),
        ))
    }

    /// Drop every completion recorded for a role.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the backend cannot be reached.
    pub async fn clear(&self, role: &RoleId) -> Result<(), ProgressError> {
        let _writes = self.writes.lock().await;
        self.progress.clear_completed(role).await?;
        tracing::info!(%role, "progress cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::Curriculum;
    use portal_core::model::ModuleId;
    use storage::repository::Storage;

    fn service() -> ProgressService {
        ProgressService::new(Storage::in_memory().progress)
    }

    fn developer() -> RoleId {
        RoleId::new("developer")
    }

    #[tokio::test]
    async fn mark_is_idempotent() {
        let svc = service();
        let unit = UnitId::new("dev-int-1");
        assert_eq!(
            svc.mark_complete(&developer(), &unit).await.unwrap(),
            MarkOutcome::Marked
        );
        let first = svc.completed(&developer()).await.unwrap();
        assert_eq!(
            svc.mark_complete(&developer(), &unit).await.unwrap(),
            MarkOutcome::AlreadyComplete
        );
        assert_eq!(svc.completed(&developer()).await.unwrap(), first);
    }

    #[tokio::test]
    async fn unmark_restores_membership_and_tolerates_absence() {
        let svc = service();
        let a = UnitId::new("a");
        let b = UnitId::new("b");
        svc.mark_complete(&developer(), &a).await.unwrap();
        svc.mark_complete(&developer(), &b).await.unwrap();

        assert_eq!(
            svc.unmark(&developer(), &a).await.unwrap(),
            UnmarkOutcome::Removed
        );
        assert!(!svc.is_complete(&developer(), &a).await.unwrap());
        assert!(svc.is_complete(&developer(), &b).await.unwrap());
        assert_eq!(
            svc.unmark(&developer(), &a).await.unwrap(),
            UnmarkOutcome::NotPresent
        );
    }

    #[tokio::test]
    async fn toggle_flips_state() {
        let svc = service();
        let unit = UnitId::new("lwc-1");
        assert_eq!(
            svc.toggle(&developer(), &unit).await.unwrap(),
            ToggleOutcome::Marked
        );
        assert_eq!(
            svc.toggle(&developer(), &unit).await.unwrap(),
            ToggleOutcome::Unmarked
        );
        assert!(svc.completed(&developer()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn module_percentage_ignores_units_from_other_modules() {
        let curriculum = Curriculum::builtin().unwrap();
        let module = curriculum
            .module(&developer(), &ModuleId::new("dev-interview-1"))
            .unwrap();
        let svc = service();
        svc.mark_complete(&developer(), &UnitId::new("lwc-1"))
            .await
            .unwrap();
        svc.mark_complete(&developer(), &UnitId::new("dev-int-2"))
            .await
            .unwrap();

        assert_eq!(svc.module_percentage(&developer(), module).await.unwrap(), 50);
        assert_eq!(svc.completion_percentage(&developer(), 2).await.unwrap(), 100);
        assert_eq!(svc.completion_percentage(&developer(), 0).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clear_empties_only_that_role() {
        let svc = service();
        let qa = RoleId::new("qa");
        svc.mark_complete(&developer(), &UnitId::new("a")).await.unwrap();
        svc.mark_complete(&qa, &UnitId::new("q")).await.unwrap();

        svc.clear(&developer()).await.unwrap();
        assert!(svc.completed(&developer()).await.unwrap().is_empty());
        assert_eq!(svc.completed(&qa).await.unwrap().len(), 1);
    }
}
