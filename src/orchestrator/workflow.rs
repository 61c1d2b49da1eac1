//! The toggle-favourite and load-favourites workflows.
//!
//! The [`Orchestrator`] is the only code that talks to the favourites service.
//! It never mutates state directly: after the service answers it dispatches an
//! action carrying the authoritative result, and on failure it dispatches
//! nothing that touches the favourites list.
//!
//! # Toggle flow
//!
//! 1. Plan from the current state and mark the image pending, atomically
//! 2. Call the service with no state borrowed, so the UI stays interactive
//! 3. On success commit `ToggleFavourite(record)` unless the favourites list
//!    already reflects it; on failure log and stop
//! 4. Clear the pending mark, also when the future is dropped mid-request

use super::plan::{plan_toggle, Skip, TogglePlan};
use crate::app::{Action, Store};
use crate::domain::{FavouriteImage, ServiceError};
use crate::service::FavouritesService;
use tracing::Instrument;

/// Result of one toggle attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The service created this record and it was added to the favourites.
    Added(FavouriteImage),
    /// The service deleted this record and it was removed from the favourites.
    Removed(FavouriteImage),
    /// The service call failed; favourites are unchanged.
    Failed(ServiceError),
    /// No request was made.
    Skipped(Skip),
}

/// Clears the pending mark for an image when dropped.
struct SettleGuard<'a> {
    store: &'a Store,
    image_id: String,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.store.dispatch(Action::ToggleSettled {
            image_id: std::mem::take(&mut self.image_id),
        });
    }
}

/// Membership already matches the confirmed outcome.
struct AlreadyCommitted;

/// Applies a confirmed toggle unless the favourites list already reflects it.
///
/// A `FavouritesLoaded` landing while the request was suspended may have
/// brought the list up to date; flipping membership again would undo it.
fn commit(store: &Store, plan: &TogglePlan, record: &FavouriteImage) {
    let should_be_favourite = matches!(plan, TogglePlan::Add { .. });

    let committed = store.dispatch_with(|state| -> Result<_, AlreadyCommitted> {
        if state.is_favourite(plan.image_id()) == should_be_favourite {
            return Err(AlreadyCommitted);
        }
        Ok((Action::ToggleFavourite(record.clone()), ()))
    });

    if committed.is_err() {
        tracing::debug!(
            image_id = %plan.image_id(),
            "favourites already reflect toggle, nothing to commit"
        );
    }
}

/// Runs favourites workflows against a service and reconciles the results
/// into a [`Store`].
#[derive(Debug, Clone)]
pub struct Orchestrator<S> {
    service: S,
}

impl<S: FavouritesService> Orchestrator<S> {
    /// Creates an orchestrator over a favourites service.
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Returns the underlying favourites service.
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Adds or removes the open image as a favourite.
    ///
    /// Other actions may be dispatched to `store` while the service call is
    /// suspended; they see the state as it was before the toggle.
    pub async fn toggle_favourite(&self, store: &Store) -> ToggleOutcome {
        let planned = store.dispatch_with(|state| -> Result<_, Skip> {
            let plan = plan_toggle(state)?;
            let started = Action::ToggleStarted {
                image_id: plan.image_id().to_string(),
            };
            Ok((started, plan))
        });

        let plan = match planned {
            Ok(plan) => plan,
            Err(skip) => {
                tracing::debug!(reason = %skip, "favourite toggle skipped");
                return ToggleOutcome::Skipped(skip);
            }
        };

        let _settle = SettleGuard {
            store,
            image_id: plan.image_id().to_string(),
        };

        let span = tracing::debug_span!(
            "toggle_favourite",
            image_id = %plan.image_id(),
            operation = plan.name()
        );

        async {
            match self.execute(&plan).await {
                Ok(record) => {
                    tracing::debug!(favourite_id = %record.id, "favourite toggle confirmed");
                    commit(store, &plan, &record);
                    match plan {
                        TogglePlan::Add { .. } => ToggleOutcome::Added(record),
                        TogglePlan::Remove { .. } => ToggleOutcome::Removed(record),
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "favourite toggle failed, state left unchanged");
                    ToggleOutcome::Failed(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Performs the remote half of a plan and returns the authoritative record.
    ///
    /// An add yields a fresh record with the service-issued id; a remove yields
    /// the existing record unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceError`] of the failed call.
    pub async fn execute(&self, plan: &TogglePlan) -> Result<FavouriteImage, ServiceError> {
        match plan {
            TogglePlan::Add { image } => {
                let id = self.service.add(&image.id).await?;
                Ok(FavouriteImage::new(id, image.clone()))
            }
            TogglePlan::Remove { record } => {
                self.service.remove(&record.id).await?;
                Ok(record.clone())
            }
        }
    }

    /// Replaces the local favourites with the service's list.
    ///
    /// Returns the number of records listed.
    ///
    /// # Errors
    ///
    /// Returns the [`ServiceError`] of the failed call. State is unchanged in
    /// that case.
    pub async fn load_favourites(&self, store: &Store) -> Result<usize, ServiceError> {
        let span = tracing::debug_span!("load_favourites");

        async {
            match self.service.list().await {
                Ok(records) => {
                    let count = records.len();
                    store.dispatch(Action::FavouritesLoaded(records));
                    tracing::debug!(count = count, "favourites loaded");
                    Ok(count)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to load favourites, state left unchanged");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
