//! 从课表识别文本中提取科目代码与名称

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::subjects::requests::ScannedSubject;

/// 识别不到名称时使用的占位名
pub const PLACEHOLDER_SUBJECT_NAME: &str = "วิชาใหม่ (AI ตรวจไม่พบชื่อ)";

static SUBJECT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{5}-\d{4}").expect("Invalid subject code regex"));

static TRAILING_PERIODS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}$").expect("Invalid trailing digits regex"));

fn strip_trailing_digits(text: &str) -> String {
    TRAILING_PERIODS_RE.replace(text, "").trim().to_string()
}

/// 逐行扫描：每行第一个 `ddddd-dddd` 为代码，同一代码只保留首次出现
pub fn extract_subjects(text: &str) -> Vec<ScannedSubject> {
    let cleaned: String = text
        .chars()
        .map(|c| if matches!(c, '|' | '[' | ']') { ' ' } else { c })
        .collect();
    let lines: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut extracted = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(found) = SUBJECT_CODE_RE.find(line) else {
            continue;
        };
        let code = found.as_str();
        if seen.contains(code) {
            continue;
        }

        let mut name = strip_trailing_digits(&line.replacen(code, "", 1));

        // 名称过短时尝试下一行（下一行不能是另一门课）
        if name.chars().count() < 2 {
            if let Some(next) = lines.get(i + 1) {
                if !SUBJECT_CODE_RE.is_match(next) {
                    name = strip_trailing_digits(next);
                }
            }
        }

        if name.is_empty() {
            name = PLACEHOLDER_SUBJECT_NAME.to_string();
        }

        seen.insert(code.to_string());
        extracted.push(ScannedSubject {
            code: code.to_string(),
            name,
        });
    }

    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[ScannedSubject]) -> Vec<(&str, &str)> {
        items
            .iter()
            .map(|s| (s.code.as_str(), s.name.as_str()))
            .collect()
    }

    #[test]
    fn test_code_and_name_on_same_line() {
        let text = "| 20000-1101 ภาษาไทยเพื่ออาชีพ 1020 |\n[30001-2001] Mathematics";
        let got = extract_subjects(text);
        assert_eq!(
            pairs(&got),
            vec![
                ("20000-1101", "ภาษาไทยเพื่ออาชีพ"),
                ("30001-2001", "Mathematics"),
            ]
        );
    }

    #[test]
    fn test_name_taken_from_next_line() {
        let text = "20000-1101 1020\nภาษาไทย 2030\n20000-1201";
        let got = extract_subjects(text);
        assert_eq!(got[0].name, "ภาษาไทย");
        assert_eq!(got[1].code, "20000-1201");
        assert_eq!(got[1].name, PLACEHOLDER_SUBJECT_NAME);
    }

    #[test]
    fn test_next_line_with_code_is_not_borrowed() {
        let text = "20000-1101\n20000-1201 English";
        let got = extract_subjects(text);
        assert_eq!(got[0].name, PLACEHOLDER_SUBJECT_NAME);
        assert_eq!(got[1].name, "English");
    }

    #[test]
    fn test_duplicate_codes_skipped_in_order() {
        let text = "20000-1101 Thai\n\n   \n20000-1101 Thai again\n20000-1301 Science";
        let got = extract_subjects(text);
        assert_eq!(
            pairs(&got),
            vec![("20000-1101", "Thai"), ("20000-1301", "Science")]
        );
    }

    #[test]
    fn test_no_codes_yields_empty() {
        assert!(extract_subjects("no schedule here\n1234-567").is_empty());
    }
}
