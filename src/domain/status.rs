use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Favorite flag for one item, as held by a single toggle instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteStatus {
    pub item_id: String,
    pub is_favorite: bool,
    /// Last time the server confirmed the value (check or accepted write).
    pub checked_at: Option<DateTime<Utc>>,
}

impl FavoriteStatus {
    pub fn new(item_id: String) -> Self {
        Self {
            item_id,
            is_favorite: false,
            checked_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    Pending,
}

/// What a call to `toggle` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Nobody is signed in; the user was sent to the login route.
    LoginRequired,
    /// Another toggle was still in flight.
    Ignored,
    /// The server accepted the write.
    Changed { is_favorite: bool },
    /// The write failed; local state is untouched.
    Failed,
}

impl ToggleOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, ToggleOutcome::Changed { .. })
    }
}
