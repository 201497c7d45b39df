/// LIKE 转义字符，查询中配合 `ESCAPE '!'` 使用
pub const LIKE_ESCAPE: char = '!';

/// 转义 LIKE 模式中的通配符
pub fn escape_like_pattern(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// 构造 `%keyword%` 形式的模式，关键字为空时返回 None
pub fn contains_pattern(keyword: Option<&str>) -> Option<String> {
    keyword
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| format!("%{}%", escape_like_pattern(&k.to_lowercase())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("50%_off"), "50!%!_off");
        assert_eq!(escape_like_pattern("wow!"), "wow!!");
        assert_eq!(escape_like_pattern(r"a\b"), r"a\b");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern(Some(" Math ")), Some("%math%".to_string()));
        assert_eq!(contains_pattern(Some("10%")), Some("%10!%%".to_string()));
        assert_eq!(contains_pattern(Some("  ")), None);
        assert_eq!(contains_pattern(None), None);
    }
}
