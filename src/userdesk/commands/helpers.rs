use crate::model::UserData;

/// Validate a form payload before it touches any store.
///
/// Returns the instructional message to show the operator, or `None` when
/// the payload is acceptable.
pub fn validate(data: &UserData) -> Option<String> {
    if data.name().trim().is_empty() {
        return Some("Name is required.".to_string());
    }
    let email = data.email().trim();
    if email.is_empty() || !email_shape_ok(email) {
        return Some("A valid email address is required.".to_string());
    }
    None
}

/// Minimal `local@domain.tld` shape check, not full RFC validation:
/// no whitespace, a non-leading `@`, and a dot with at least one character
/// on each side somewhere after it.
fn email_shape_ok(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    if chars.is_empty() || chars.iter().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some(at) = chars
        .iter()
        .skip(1)
        .position(|&c| c == '@')
        .map(|p| p + 1)
    else {
        return false;
    };
    // empty range when the domain part is too short
    (at + 2..chars.len() - 1).any(|k| chars[k] == '.')
}
