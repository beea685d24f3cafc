pub(crate) mod health;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod me;
pub(crate) mod refresh;
pub(crate) mod register;
pub(crate) mod status;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use health::*;
pub use login::*;
pub use logout::*;
pub use me::*;
pub use refresh::*;
pub use register::*;
pub use status::*;
pub use verify_token::*;
