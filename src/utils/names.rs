use once_cell::sync::Lazy;
use regex::Regex;

// 泰语称谓前缀，长的放前面
static HONORIFIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(นาย|นางสาว|นาง|เด็กชาย|เด็กหญิง|ด\.ช\.|ด\.ญ\.)")
        .expect("Invalid honorific regex")
});

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// 姓名归一化：去掉一个开头的称谓，删除所有空白并转小写
pub fn normalize_name(name: &str) -> String {
    let without_title = HONORIFIC_RE.replace(name.trim_start(), "");
    WHITESPACE_RE
        .replace_all(&without_title, "")
        .to_lowercase()
}

/// 学生登录时的姓名比对
pub fn full_name_matches(first_name: &str, last_name: &str, input: &str) -> bool {
    let expected = normalize_name(&format!("{first_name}{last_name}"));
    !expected.is_empty() && expected == normalize_name(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_single_honorific() {
        assert_eq!(normalize_name("นายสมชาย ใจดี"), "สมชายใจดี");
        assert_eq!(normalize_name("นางสาวสมหญิง รักเรียน"), "สมหญิงรักเรียน");
        assert_eq!(normalize_name("ด.ช. ต้น กล้า"), "ต้นกล้า");
        assert_eq!(normalize_name("เด็กหญิงมะลิ  หอม"), "มะลิหอม");
    }

    #[test]
    fn test_honorific_only_at_start() {
        assert_eq!(normalize_name("สมชาย นาย"), "สมชายนาย");
    }

    #[test]
    fn test_latin_names_lowercased() {
        assert_eq!(normalize_name("  John   Smith "), "johnsmith");
    }

    #[test]
    fn test_full_name_matches() {
        assert!(full_name_matches("สมชาย", "ใจดี", "นาย สมชาย ใจดี"));
        assert!(full_name_matches("John", "Smith", "john smith"));
        assert!(!full_name_matches("John", "Smith", "jane smith"));
        assert!(!full_name_matches("", "", ""));
    }
}
