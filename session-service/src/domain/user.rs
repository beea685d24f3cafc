use super::{Email, Identity};

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: Email,
    pub password_hash: String, // argon2id PHC string
    pub subscription: String,
}

impl User {
    pub fn new(id: String, email: Email, password_hash: String, subscription: String) -> Self {
        User {
            id,
            email,
            password_hash,
            subscription,
        }
    }

    /// The claims embedded in tokens minted for this user.
    pub fn identity(&self) -> Identity {
        Identity::new(
            self.id.clone(),
            self.email.as_ref(),
            self.subscription.clone(),
        )
    }
}
