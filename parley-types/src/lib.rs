pub mod requests {
    use serde::{Deserialize, Serialize};

    /// Body of the `/signin` and `/signup` requests.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Credentials {
        pub username: String,
        pub password: String,
    }
}

pub mod responses {
    use serde::{Deserialize, Serialize};

    /// Body of the server's answer to an auth request.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
    #[display("{}", display_auth(success, reason))]
    pub struct Auth {
        pub success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,
    }

    impl Auth {
        pub fn ok() -> Self {
            Self {
                success: true,
                reason: None,
            }
        }

        pub fn denied(reason: impl Into<String>) -> Self {
            Self {
                success: false,
                reason: Some(reason.into()),
            }
        }
    }

    fn display_auth(success: &bool, reason: &Option<String>) -> String {
        match (success, reason) {
            (true, _) => "Authenticated".to_string(),
            (false, Some(reason)) => format!("Authentication failed: {reason}"),
            (false, None) => "Authentication failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_reads_server_bodies() {
        let ok: responses::Auth = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok, responses::Auth::ok());

        let denied: responses::Auth =
            serde_json::from_str(r#"{"success": false, "reason": "User not found"}"#).unwrap();
        assert_eq!(denied, responses::Auth::denied("User not found"));
        assert_eq!(denied.to_string(), "Authentication failed: User not found");
    }

    #[test]
    fn auth_omits_missing_reason() {
        let body = serde_json::to_string(&responses::Auth::ok()).unwrap();
        assert_eq!(body, r#"{"success":true}"#);
    }

    #[test]
    fn credentials_field_names() {
        let creds = requests::Credentials {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(value["username"], "alice");
        assert_eq!(value["password"], "hunter2");
    }
}
