use serde::{Deserialize, Serialize};

use super::Identity;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct SessionResponse {
    pub success: bool,
    pub user: Identity,
}

/// Returned from endpoints that serve both anonymous and signed-in callers.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct StatusResponse {
    pub success: bool,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,
}
