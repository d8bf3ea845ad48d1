use std::fmt;

/// An authenticated user as seen by the client.
///
/// Issued and owned by the auth collaborator; this crate only reads it.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub token: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            token: token.into(),
        }
    }

    /// Build a session from optional parts. A missing or blank token means
    /// nobody is signed in.
    pub fn from_parts(user_id: Option<String>, token: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        Some(Self {
            user_id: user_id.unwrap_or_default(),
            token,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("u-1", "secret-token");
        let rendered = format!("{:?}", session);
        assert!(rendered.contains("u-1"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn test_from_parts_requires_token() {
        assert!(Session::from_parts(Some("u-1".into()), None).is_none());
        assert!(Session::from_parts(Some("u-1".into()), Some("  ".into())).is_none());

        let session = Session::from_parts(None, Some("abc".into())).unwrap();
        assert_eq!(session.user_id, "");
        assert_eq!(session.token, "abc");
    }
}
