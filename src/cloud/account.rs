//! Scylla Cloud account identity

use super::decode::null_as_default;
use serde::{Deserialize, Serialize};

/// Path of the caller's default account
pub const DEFAULT_ACCOUNT_PATH: &str = "/account/default";

/// The authenticated user's membership in their default account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAccount {
    #[serde(rename = "UserID", deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(rename = "AccountID", deserialize_with = "null_as_default")]
    pub account_id: i64,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "OwnerUserID", deserialize_with = "null_as_default")]
    pub owner_user_id: i64,
    #[serde(rename = "AccountStatus", deserialize_with = "null_as_default")]
    pub account_status: String,
    #[serde(rename = "Role", deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(rename = "UserAccountStatus", deserialize_with = "null_as_default")]
    pub user_account_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_account_from_api_json() {
        let account: UserAccount = serde_json::from_str(
            r#"{
                "UserID": 1001,
                "AccountID": 42,
                "Name": "acme",
                "OwnerUserID": 1001,
                "AccountStatus": "ACTIVE",
                "Role": "ADMIN",
                "UserAccountStatus": "ACTIVE"
            }"#,
        )
        .unwrap();

        assert_eq!(account.account_id, 42);
        assert_eq!(account.user_id, 1001);
        assert_eq!(account.role, "ADMIN");
    }

    #[test]
    fn test_user_account_missing_fields_default() {
        let account: UserAccount = serde_json::from_str(r#"{"AccountID": 7}"#).unwrap();
        assert_eq!(account.account_id, 7);
        assert!(account.name.is_empty());
    }

    #[test]
    fn test_user_account_null_fields_default() {
        let account: UserAccount =
            serde_json::from_str(r#"{"AccountID": 42, "Name": null, "OwnerUserID": null}"#)
                .unwrap();
        assert_eq!(account.account_id, 42);
        assert!(account.name.is_empty());
        assert_eq!(account.owner_user_id, 0);
    }
}
