use crate::config::WebConfig;

/// Sends the user somewhere else in the front end.
pub trait Navigator {
    fn redirect(&self, route: &str);
}

/// Opens front-end routes in the system browser.
pub struct BrowserNavigator {
    web: WebConfig,
}

impl BrowserNavigator {
    pub fn new(web: WebConfig) -> Self {
        Self { web }
    }
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, route: &str) {
        let url = self.web.route_url(route);
        println!("Sign in required: {}", url);

        if let Err(e) = open::that(&url) {
            tracing::warn!("Could not open browser for {}: {}", url, e);
        }
    }
}
