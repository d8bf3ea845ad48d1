use serde::{Deserialize, Serialize};

/// Endpoint layout for one family of favoritable items.
///
/// Every family uses the same three endpoints under its own prefix:
/// `GET {prefix}/check/{id}`, `POST {prefix}` and `DELETE {prefix}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFamily {
    #[serde(skip)]
    pub name: String,
    pub prefix: String,
    /// JSON key carrying the item id in the create body.
    pub body_key: String,
}

impl ResourceFamily {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        body_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            body_key: body_key.into(),
        }
    }

    /// Generic favorites (destinations, service profiles).
    pub fn destinations() -> Self {
        Self::new("destination", "/favorites", "destinationId")
    }

    pub fn locations() -> Self {
        Self::new("location", "/location-favorites", "locationId")
    }

    fn prefix_segments(&self) -> impl Iterator<Item = &str> {
        self.prefix.split('/').filter(|s| !s.is_empty())
    }

    /// Path segments of the status check endpoint.
    pub fn check_segments<'a>(&'a self, item_id: &'a str) -> Vec<&'a str> {
        self.prefix_segments()
            .chain(["check", item_id])
            .collect()
    }

    pub fn create_segments(&self) -> Vec<&str> {
        self.prefix_segments().collect()
    }

    pub fn delete_segments<'a>(&'a self, item_id: &'a str) -> Vec<&'a str> {
        self.prefix_segments().chain([item_id]).collect()
    }

    /// JSON body for the create call: `{ "<body_key>": "<item_id>" }`.
    pub fn create_body(&self, item_id: &str) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            self.body_key.clone(),
            serde_json::Value::String(item_id.to_string()),
        );
        serde_json::Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_segments() {
        let family = ResourceFamily::destinations();
        assert_eq!(family.check_segments("dest-1"), vec!["favorites", "check", "dest-1"]);
        assert_eq!(family.create_segments(), vec!["favorites"]);
        assert_eq!(family.delete_segments("dest-1"), vec!["favorites", "dest-1"]);
    }

    #[test]
    fn test_nested_prefix_ignores_extra_slashes() {
        let family = ResourceFamily::new("hotel", "/v2//hotel-favorites/", "hotelId");
        assert_eq!(
            family.check_segments("h9"),
            vec!["v2", "hotel-favorites", "check", "h9"]
        );
    }

    #[test]
    fn test_create_body_uses_family_key() {
        assert_eq!(
            ResourceFamily::destinations().create_body("dest-1"),
            serde_json::json!({ "destinationId": "dest-1" })
        );
        assert_eq!(
            ResourceFamily::locations().create_body("loc-7"),
            serde_json::json!({ "locationId": "loc-7" })
        );
    }
}
