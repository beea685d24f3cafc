use crate::validation::is_valid_email;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Emails are compared case-insensitively, so the stored form is
    /// trimmed and lowercased.
    pub fn parse(email: String) -> Result<Email, String> {
        let normalized = email.trim().to_lowercase();
        match is_valid_email(&normalized) {
            true => Ok(Email(normalized)),
            false => Err(format!("Email {} is not valid", email)),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
