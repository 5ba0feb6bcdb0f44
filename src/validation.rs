//! Input validators shared by the user and learner-record routes.

use crate::constants::MAX_SCORE;

/// Password strength: 8-256 bytes with at least one uppercase letter, one
/// lowercase letter and one digit.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("password must be at least 8 characters");
    }
    if password.len() > 256 {
        return Err("password must be at most 256 characters");
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_upper || !has_lower || !has_digit {
        return Err("password must contain an uppercase letter, a lowercase letter and a digit");
    }
    Ok(())
}

/// Basic shape check: user@domain.tld, restricted character sets on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if !local
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_' || b == b'+' || b == b'-')
    {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }
    if !domain
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
    {
        return false;
    }
    domain
        .split('.')
        .all(|part| !part.is_empty() && !part.starts_with('-') && !part.ends_with('-'))
}

/// Usernames: 2-50 characters, letters, digits, underscore, hyphen and space.
/// Counted in chars so Kurdish names are not penalized for UTF-8 width.
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let char_count = username.chars().count();
    if !(2..=50).contains(&char_count) {
        return Err("username must be 2 to 50 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == ' ')
    {
        return Err("username may only contain letters, digits, underscores, hyphens and spaces");
    }
    Ok(())
}

/// Lesson scores are percentages.
pub fn validate_score(score: u32) -> Result<(), &'static str> {
    if score > MAX_SCORE {
        return Err("score must be between 0 and 100");
    }
    Ok(())
}
