use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    let len = username.chars().count();
    if !(3..=32).contains(&len) {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores, dots or hyphens");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err("Password must not be empty");
    }
    Ok(())
}

/// 必填文本字段：去除首尾空白后不能为空
pub fn require_text(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// 可选文本字段：给出时同样不能为空
pub fn optional_text(value: Option<&str>, field: &str) -> Result<Option<String>, String> {
    value.map(|v| require_text(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("t.smith-01").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_password_not_blank() {
        assert!(validate_password("x").is_ok());
        assert!(validate_password("   ").is_err());
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  Math  ", "name").unwrap(), "Math");
        assert!(require_text("   ", "name").is_err());
        assert_eq!(optional_text(None, "name").unwrap(), None);
        assert!(optional_text(Some(""), "name").is_err());
    }
}
