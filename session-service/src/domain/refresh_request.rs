use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequestBody {
    #[serde(default)]
    pub refresh_token: Option<String>,
}
