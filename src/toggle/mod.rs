//! Favorite toggle for a single displayed item.
//!
//! A [`FavoriteToggle`] mirrors the server-side favorite flag of one item for
//! the injected user and lets the user flip it:
//!
//! ```text
//! mount / identity change ─► check_status ─► GET  {prefix}/check/{id}
//! user action             ─► toggle       ─► POST {prefix} | DELETE {prefix}/{id}
//! ```
//!
//! Failures never escape: they are logged and the displayed flag keeps its
//! last known value. Successful writes flip the local flag without a
//! re-fetch.

mod guard;

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::api::FavoritesApi;
use crate::domain::{FavoriteStatus, ResourceFamily, Session, ToggleOutcome, ToggleState};
use crate::navigator::Navigator;

use guard::PendingGuard;

pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Called with `(item_id, is_favorite)` after the server accepts a toggle.
pub type ChangeCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

struct View {
    status: FavoriteStatus,
    session: Option<Session>,
    /// Bumped on every identity change and on unmount.
    generation: u64,
    /// Bumped on every accepted write. Checks sent before it are stale.
    writes: u64,
    mounted: bool,
}

impl View {
    fn is_current(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }
}

pub struct FavoriteToggle {
    api: Arc<dyn FavoritesApi + Send + Sync>,
    family: ResourceFamily,
    navigator: Arc<dyn Navigator + Send + Sync>,
    login_route: String,
    on_change: Option<ChangeCallback>,
    pending: AtomicBool,
    view: Mutex<View>,
}

impl FavoriteToggle {
    pub fn new(
        api: Arc<dyn FavoritesApi + Send + Sync>,
        family: ResourceFamily,
        navigator: Arc<dyn Navigator + Send + Sync>,
        item_id: impl Into<String>,
        session: Option<Session>,
    ) -> Self {
        Self {
            api,
            family,
            navigator,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            on_change: None,
            pending: AtomicBool::new(false),
            view: Mutex::new(View {
                status: FavoriteStatus::new(item_id.into()),
                session,
                generation: 0,
                writes: 0,
                mounted: true,
            }),
        }
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn on_change(mut self, callback: ChangeCallback) -> Self {
        self.on_change = Some(callback);
        self
    }

    fn view(&self) -> MutexGuard<'_, View> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn item_id(&self) -> String {
        self.view().status.item_id.clone()
    }

    pub fn is_favorite(&self) -> bool {
        self.view().status.is_favorite
    }

    pub fn status(&self) -> FavoriteStatus {
        self.view().status.clone()
    }

    pub fn is_pending(&self) -> bool {
        PendingGuard::is_held(&self.pending)
    }

    pub fn state(&self) -> ToggleState {
        if self.is_pending() {
            ToggleState::Pending
        } else {
            ToggleState::Idle
        }
    }

    /// Initial status check.
    pub async fn mount(&self) {
        self.check_status().await;
    }

    /// Stop applying results of calls that settle from now on.
    pub fn unmount(&self) {
        let mut view = self.view();
        view.mounted = false;
        view.generation += 1;
    }

    /// Point the toggle at another item or user and re-check.
    ///
    /// Does nothing if both are unchanged.
    pub async fn set_identity(&self, item_id: impl Into<String>, session: Option<Session>) {
        let item_id = item_id.into();
        {
            let mut view = self.view();
            if !view.mounted || (view.status.item_id == item_id && view.session == session) {
                return;
            }
            view.generation += 1;
            view.status = FavoriteStatus::new(item_id);
            view.session = session;
        }

        self.check_status().await;
    }

    /// Refresh the flag from the server. Anonymous users are never favorited.
    pub async fn check_status(&self) {
        let (item_id, session, generation, writes) = {
            let mut view = self.view();
            if !view.mounted {
                return;
            }
            if view.session.is_none() {
                view.status.is_favorite = false;
                return;
            }
            (
                view.status.item_id.clone(),
                view.session.clone(),
                view.generation,
                view.writes,
            )
        };
        let Some(session) = session else {
            return;
        };

        match self.api.check(&self.family, &item_id, &session).await {
            Ok(is_favorite) => {
                let mut view = self.view();
                if view.is_current(generation) && view.writes == writes {
                    view.status.is_favorite = is_favorite;
                    view.status.checked_at = Some(Utc::now());
                } else {
                    tracing::debug!("Discarding stale favorite status for {}", item_id);
                }
            }
            Err(e) => {
                tracing::error!("Failed to check favorite status for {}: {}", item_id, e);
            }
        }
    }

    /// Flip the favorite flag of the current item.
    ///
    /// Anonymous users are redirected to the login route. While a previous
    /// toggle is in flight this returns [`ToggleOutcome::Ignored`] without
    /// touching the network.
    pub async fn toggle(&self) -> ToggleOutcome {
        {
            let view = self.view();
            if !view.mounted {
                return ToggleOutcome::Ignored;
            }
            if view.session.is_none() {
                drop(view);
                tracing::debug!("Anonymous favorite toggle, redirecting to {}", self.login_route);
                self.navigator.redirect(&self.login_route);
                return ToggleOutcome::LoginRequired;
            }
        }

        let Some(guard) = PendingGuard::acquire(&self.pending) else {
            tracing::debug!("Favorite toggle already in flight, ignoring");
            return ToggleOutcome::Ignored;
        };

        let (item_id, session, was_favorite, generation) = {
            let view = self.view();
            (
                view.status.item_id.clone(),
                view.session.clone(),
                view.status.is_favorite,
                view.generation,
            )
        };
        let Some(session) = session else {
            self.navigator.redirect(&self.login_route);
            return ToggleOutcome::LoginRequired;
        };

        let result = if was_favorite {
            self.api.remove(&self.family, &item_id, &session).await
        } else {
            self.api.add(&self.family, &item_id, &session).await
        };

        match result {
            Ok(()) => {
                let is_favorite = !was_favorite;
                {
                    let mut view = self.view();
                    if view.is_current(generation) {
                        view.status.is_favorite = is_favorite;
                        view.status.checked_at = Some(Utc::now());
                        view.writes += 1;
                    } else {
                        tracing::debug!("Item changed while toggling {}, not applying", item_id);
                    }
                }
                drop(guard);

                tracing::info!(
                    "{} {} favorites",
                    if is_favorite { "Added" } else { "Removed" },
                    item_id
                );

                if let Some(callback) = &self.on_change {
                    callback(&item_id, is_favorite);
                }

                ToggleOutcome::Changed { is_favorite }
            }
            Err(e) => {
                tracing::error!("Failed to toggle favorite for {}: {}", item_id, e);
                ToggleOutcome::Failed
            }
        }
    }
}
