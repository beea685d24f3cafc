mod auth;
mod login;
mod refresh;
mod register;
mod token;

pub use auth::*;
pub use login::*;
pub use refresh::*;
pub use register::*;
pub use token::*;
