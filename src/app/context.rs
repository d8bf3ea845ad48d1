use std::path::Path;
use std::sync::Arc;

use crate::api::{FavoritesApi, HttpFavoritesApi};
use crate::app::error::{FavError, Result};
use crate::config::Config;
use crate::domain::{ResourceFamily, Session};
use crate::navigator::{BrowserNavigator, Navigator};
use crate::toggle::FavoriteToggle;

pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn FavoritesApi + Send + Sync>,
    pub navigator: Arc<dyn Navigator + Send + Sync>,
    pub session: Option<Session>,
}

impl AppContext {
    /// Load config (from `config_path` or the default location) and wire the
    /// HTTP client and browser navigator.
    pub fn new(config_path: Option<&Path>, session: Option<Session>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        Self::with_config(config, session)
    }

    /// `session` wins over credentials stored in the config file.
    pub fn with_config(config: Config, session: Option<Session>) -> Result<Self> {
        let api: Arc<dyn FavoritesApi + Send + Sync> =
            Arc::new(HttpFavoritesApi::new(&config.api)?);
        let navigator: Arc<dyn Navigator + Send + Sync> =
            Arc::new(BrowserNavigator::new(config.web.clone()));
        let session = session.or_else(|| config.session.session());

        Ok(Self {
            config,
            api,
            navigator,
            session,
        })
    }

    pub fn resource(&self, name: &str) -> Result<&ResourceFamily> {
        self.config
            .resource(name)
            .ok_or_else(|| FavError::UnknownResource(name.to_string()))
    }

    /// A toggle for one item of the named resource family.
    pub fn toggle_for(&self, resource: &str, item_id: &str) -> Result<FavoriteToggle> {
        let family = self.resource(resource)?.clone();

        Ok(FavoriteToggle::new(
            self.api.clone(),
            family,
            self.navigator.clone(),
            item_id,
            self.session.clone(),
        )
        .with_login_route(self.config.web.login_route.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_session_overrides_config() {
        let mut config = Config::default();
        config.session.token = Some("from-config".into());

        let ctx = AppContext::with_config(config.clone(), None).unwrap();
        assert_eq!(ctx.session.unwrap().token, "from-config");

        let ctx = AppContext::with_config(config, Some(Session::new("u", "from-cli"))).unwrap();
        assert_eq!(ctx.session.unwrap().token, "from-cli");
    }

    #[test]
    fn test_unknown_resource() {
        let ctx = AppContext::with_config(Config::default(), None).unwrap();
        assert!(matches!(
            ctx.toggle_for("spaceship", "x"),
            Err(FavError::UnknownResource(_))
        ));
        assert!(ctx.toggle_for("location", "loc-1").is_ok());
    }
}
