use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("pattern compiles"));
static SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("pattern compiles"));

const MIN_PASSWORD_CHARS: usize = 8;

/// True if pw is ≥8 chars, has at least one uppercase and one special char
pub fn is_valid_password(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_CHARS && UPPER_RE.is_match(pw) && SPECIAL_RE.is_match(pw)
}
