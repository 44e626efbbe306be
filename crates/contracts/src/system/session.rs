use super::auth::LoginResponse;

/// Logged-in user for the current app session.
///
/// Populated on login, cleared on logout, and handed to pages explicitly
/// instead of being read from browser storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    username: Option<String>,
    token: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a login reply. Returns the failure reason when it was rejected,
    /// leaving the session untouched.
    pub fn login(&mut self, requested_username: &str, response: &LoginResponse) -> Result<(), String> {
        if let Some(reason) = response.failure_reason() {
            return Err(reason);
        }
        let username = response
            .username
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| requested_username.trim().to_string());
        self.username = Some(username);
        self.token = response.token.clone();
        Ok(())
    }

    pub fn logout(&mut self) {
        self.username = None;
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.username().unwrap_or("Guest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout() {
        let mut session = SessionContext::new();
        let response = LoginResponse {
            success: true,
            token: Some("t-1".to_string()),
            ..LoginResponse::default()
        };
        session.login(" admin ", &response).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), "admin");
        assert_eq!(session.token(), Some("t-1"));

        session.logout();
        assert_eq!(session, SessionContext::default());
        assert_eq!(session.display_name(), "Guest");
    }

    #[test]
    fn test_rejected_login_keeps_session_empty() {
        let mut session = SessionContext::new();
        let response = LoginResponse {
            success: false,
            message: Some("Invalid credentials".to_string()),
            ..LoginResponse::default()
        };
        assert_eq!(session.login("admin", &response), Err("Invalid credentials".to_string()));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_server_username_wins() {
        let mut session = SessionContext::new();
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": true, "username": "Ravi"}"#).unwrap();
        session.login("ravi", &response).unwrap();
        assert_eq!(session.username(), Some("Ravi"));
    }
}
