use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}
