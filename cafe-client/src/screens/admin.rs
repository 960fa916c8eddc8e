//! Admin screen controllers
//!
//! One state machine drives every form-managed entity screen:
//!
//! ```text
//! Idle ──add new──▶ Editing(empty draft)          ──submit──▶ Saving
//! Idle ──edit─────▶ Editing(record draft)         ──submit──▶ Saving
//! Saving ──ok──▶ Idle (list refetched in full)
//! Saving ──err─▶ Error (draft preserved for retry)
//! Idle ──request delete──▶ pending ──confirm──▶ Idle (refetched)
//! ```
//!
//! Required-field validation runs before any remote call; a submit while
//! a save is in flight is refused rather than queued, which is the
//! "button disabled while pending" guard made explicit.

use shared::models::{Reservation, ReservationStatus};
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::repository::{FormResource, ListStore, Order, Repository, Resource};

/// Controller state for a form-managed screen
#[derive(Debug, Clone)]
pub enum ScreenState<D> {
    /// Showing the list; no form open
    Idle,
    /// Form open; `editing_id` is None for "add new"
    Editing { draft: D, editing_id: Option<i64> },
    /// Submit in flight; further submits are refused
    Saving,
    /// Save failed; the draft survives so the user can retry
    Error {
        message: String,
        draft: D,
        editing_id: Option<i64>,
    },
}

impl<D> ScreenState<D> {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// Generic admin CRUD screen controller
pub struct AdminScreen<R: FormResource, S: Repository<R>> {
    store: S,
    order: Order,
    items: Vec<R>,
    state: ScreenState<R::Draft>,
    pending_delete: Option<i64>,
}

impl<R: FormResource, S: Repository<R>> AdminScreen<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            order: Order::default(),
            items: Vec::new(),
            state: ScreenState::Idle,
            pending_delete: None,
        }
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn state(&self) -> &ScreenState<R::Draft> {
        &self.state
    }

    /// Fetch the full list. A read failure degrades to an empty list —
    /// the screen shows its empty state and the user retries manually.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.store.list(self.order).await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "list fetch failed");
                self.items.clear();
                Err(e)
            }
        }
    }

    /// "Add new": open the form with a fresh draft
    pub fn begin_create(&mut self) {
        self.state = ScreenState::Editing {
            draft: R::empty_draft(),
            editing_id: None,
        };
    }

    /// "Edit": open the form pre-filled from an existing row
    pub fn begin_edit(&mut self, id: i64) -> ClientResult<()> {
        let item = self
            .items
            .iter()
            .find(|i| i.id() == id)
            .ok_or_else(|| ClientError::NotFound(format!("row {id} not in list")))?;
        self.state = ScreenState::Editing {
            draft: item.to_draft(),
            editing_id: Some(id),
        };
        Ok(())
    }

    /// Mutable access to the open draft for form bindings
    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.state {
            ScreenState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Close the form without saving
    pub fn cancel_edit(&mut self) {
        if self.state.is_editing() {
            self.state = ScreenState::Idle;
        }
    }

    /// Submit the open form.
    ///
    /// Validation failures keep the form open and never reach the
    /// backend. On success the list is refetched in full — no optimistic
    /// merge. On failure the draft is preserved in the Error state.
    pub async fn submit(&mut self) -> ClientResult<()> {
        let (draft, editing_id) = match &self.state {
            ScreenState::Editing { draft, editing_id } => (draft.clone(), *editing_id),
            ScreenState::Saving => {
                return Err(ClientError::Validation("save already in progress".into()));
            }
            _ => return Err(ClientError::Validation("no form open".into())),
        };

        if let Err(e) = draft.validate() {
            return Err(ClientError::Validation(e.to_string()));
        }

        self.state = ScreenState::Saving;

        let result = match editing_id {
            None => self.store.create(&draft).await.map(|_| ()),
            Some(id) => self.store.update(id, &R::as_update(&draft)).await,
        };

        match result {
            Ok(()) => {
                self.state = ScreenState::Idle;
                // Saved row is picked up by the refetch; a failed refetch
                // leaves an empty list but the save itself stands.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => {
                self.state = ScreenState::Error {
                    message: e.to_string(),
                    draft,
                    editing_id,
                };
                Err(e)
            }
        }
    }

    /// Dismiss the error banner and reopen the form with the preserved
    /// draft
    pub fn dismiss_error(&mut self) {
        if let ScreenState::Error {
            draft, editing_id, ..
        } = std::mem::replace(&mut self.state, ScreenState::Idle)
        {
            self.state = ScreenState::Editing { draft, editing_id };
        }
    }

    /// Upload an image for the open form, storing the URL in the caller's
    /// hands (the form decides which field it fills)
    pub async fn upload_image(
        &mut self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ClientResult<String> {
        self.store.upload_asset(bytes, content_type).await
    }

    // ── destructive delete, two steps ──

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Execute the confirmed delete and refetch. Deleting an id that is
    /// already gone is treated as success.
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };
        self.store.delete(id).await?;
        self.refresh().await
    }
}

/// List-and-delete screen for entities without a form (contact inquiries,
/// newsletter subscribers)
pub struct RosterScreen<R: Resource, S: ListStore<R>> {
    store: S,
    order: Order,
    items: Vec<R>,
    pending_delete: Option<i64>,
}

impl<R: Resource, S: ListStore<R>> RosterScreen<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            order: Order::default(),
            items: Vec::new(),
            pending_delete: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.store.list(self.order).await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "list fetch failed");
                self.items.clear();
                Err(e)
            }
        }
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };
        self.store.delete(id).await?;
        self.refresh().await
    }
}

/// Store surface the reservation board needs on top of listing
#[async_trait::async_trait]
pub trait ReservationStore: ListStore<Reservation> {
    async fn set_status(&self, id: i64, status: ReservationStatus) -> ClientResult<Reservation>;
}

/// The reservation board: list + confirm/cancel actions
///
/// Actions are only offered while a booking is `pending`; once it moves,
/// the buttons disappear and the transition guard on the backend backs
/// that up.
pub struct ReservationScreen<S: ReservationStore> {
    store: S,
    order: Order,
    items: Vec<Reservation>,
}

impl<S: ReservationStore> ReservationScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            order: Order::default(),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Reservation] {
        &self.items
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.store.list(self.order).await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "list fetch failed");
                self.items.clear();
                Err(e)
            }
        }
    }

    /// Status actions offered for a row
    pub fn actions_for(reservation: &Reservation) -> &'static [ReservationStatus] {
        match reservation.status {
            ReservationStatus::Pending => {
                &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
            }
            _ => &[],
        }
    }

    /// Apply a status action and refetch
    pub async fn set_status(&mut self, id: i64, status: ReservationStatus) -> ClientResult<()> {
        self.store.set_status(id, status).await?;
        self.refresh().await
    }
}
