use serde::{Deserialize, Serialize};

/// Identity record of the signed-in user as returned by `GET /api/account`.
///
/// Only `login` is guaranteed; every other field may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    pub lang_key: Option<String>,
    #[serde(default)]
    pub authorities: Vec<String>,
}

impl Account {
    pub fn with_login(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Self::default()
        }
    }
}

/// Body of `POST /api/account/reset_password/finish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyAndPassword {
    pub key: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_decodes_with_only_login() {
        let account: Account = serde_json::from_str(r#"{"login":"bob"}"#).unwrap();
        assert_eq!(account.login, "bob");
        assert!(account.authorities.is_empty());
        assert!(!account.activated);
    }

    #[test]
    fn account_decodes_camel_case_fields() {
        let account: Account = serde_json::from_str(
            r#"{"login":"alice","firstName":"Alice","langKey":"fr","authorities":["ROLE_USER"]}"#,
        )
        .unwrap();
        assert_eq!(account.first_name.as_deref(), Some("Alice"));
        assert_eq!(account.lang_key.as_deref(), Some("fr"));
        assert_eq!(account.authorities, ["ROLE_USER"]);
    }

    #[test]
    fn reset_body_uses_new_password_field() {
        let body = KeyAndPassword {
            key: "k1".into(),
            new_password: "secret1".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["key"], "k1");
        assert_eq!(json["newPassword"], "secret1");
    }
}
