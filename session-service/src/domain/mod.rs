pub mod auth_response;
pub mod claims;
pub mod data_stores;
pub mod email;
pub mod error_response;
pub mod issued_tokens;
pub mod login_request;
pub mod logout_response;
pub mod password;
pub mod refresh_request;
pub mod refresh_response;
pub mod register_request;
pub mod session_response;
mod user;

pub use auth_response::*;
pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use error_response::*;
pub use issued_tokens::*;
pub use login_request::*;
pub use logout_response::*;
pub use password::*;
pub use refresh_request::*;
pub use refresh_response::*;
pub use register_request::*;
pub use session_response::*;
pub use user::*;
