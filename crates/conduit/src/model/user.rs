use serde::{Deserialize, Serialize};

/// Result of `user.whoami`: the user the API token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub phid: String,
    pub user_name: String,
    pub real_name: String,
    pub image: String,
    pub uri: String,
    pub roles: Vec<String>,
    pub primary_email: String,
}
