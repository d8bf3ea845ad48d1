use std::sync::{Arc, Mutex, PoisonError};

use crate::toggle::ChangeCallback;

/// Item ids shown by a "my favorites" list.
///
/// Wire [`FavoriteCollection::change_callback`] into each card's toggle so
/// that unfavorited cards drop out of the list.
#[derive(Debug, Clone, Default)]
pub struct FavoriteCollection {
    ids: Arc<Mutex<Vec<String>>>,
}

impl FavoriteCollection {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Arc::new(Mutex::new(ids.into_iter().map(Into::into).collect())),
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.ids.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|id| id == item_id)
    }

    /// Apply a confirmed favorite change.
    pub fn apply_change(&self, item_id: &str, is_favorite: bool) {
        let mut ids = self.ids.lock().unwrap_or_else(PoisonError::into_inner);
        if is_favorite {
            if !ids.iter().any(|id| id == item_id) {
                ids.push(item_id.to_string());
            }
        } else {
            let before = ids.len();
            ids.retain(|id| id != item_id);
            if ids.len() < before {
                tracing::debug!("Pruned {} from favorites list", item_id);
            }
        }
    }

    pub fn change_callback(&self) -> ChangeCallback {
        let collection = self.clone();
        Arc::new(move |item_id: &str, is_favorite: bool| {
            collection.apply_change(item_id, is_favorite)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockApi, RecordingNavigator};
    use crate::domain::{ResourceFamily, Session};
    use crate::toggle::FavoriteToggle;

    #[test]
    fn test_apply_change_prunes_and_restores() {
        let collection = FavoriteCollection::new(["dest-1", "dest-2"]);

        collection.apply_change("dest-1", false);
        assert_eq!(collection.ids(), vec!["dest-2"]);

        collection.apply_change("dest-1", true);
        collection.apply_change("dest-1", true);
        assert_eq!(collection.ids(), vec!["dest-2", "dest-1"]);
    }

    #[test]
    fn test_unknown_item_is_ignored() {
        let collection = FavoriteCollection::new(["dest-1"]);
        collection.apply_change("dest-9", false);
        assert_eq!(collection.len(), 1);
    }

    #[tokio::test]
    async fn test_unfavoriting_card_removes_it_from_list() {
        let collection = FavoriteCollection::new(["dest-1", "dest-2"]);
        let api = Arc::new(MockApi::new());
        api.set_check_result(Some(true));

        let card = FavoriteToggle::new(
            api.clone(),
            ResourceFamily::destinations(),
            Arc::new(RecordingNavigator::default()),
            "dest-1",
            Some(Session::new("u-1", "t")),
        )
        .on_change(collection.change_callback());
        card.mount().await;

        card.toggle().await;

        assert!(!collection.contains("dest-1"));
        assert!(collection.contains("dest-2"));
    }

    #[tokio::test]
    async fn test_failed_unfavorite_keeps_card() {
        let collection = FavoriteCollection::new(["dest-1"]);
        let api = Arc::new(MockApi::new());
        api.set_check_result(Some(true));
        api.set_writes_succeed(false);

        let card = FavoriteToggle::new(
            api.clone(),
            ResourceFamily::destinations(),
            Arc::new(RecordingNavigator::default()),
            "dest-1",
            Some(Session::new("u-1", "t")),
        )
        .on_change(collection.change_callback());
        card.mount().await;

        card.toggle().await;

        assert!(collection.contains("dest-1"));
        assert!(!collection.is_empty());
    }
}
