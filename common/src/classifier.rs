//! フィールド値の型判定
//!
//! 値を date / phone / email / text のいずれかに分類する。
//! ルールは固定順のリストで評価し、最初に一致したものを採用する。
//! パターンに一致しても検証で弾かれた場合は次のルールへ進む。

use crate::types::{FieldSet, FieldType, TypeMap};
use regex::{Captures, Regex};

/// 判定ルール: パターン一致後に `validate` が真を返せば `label` とする
struct Rule {
    label: FieldType,
    pattern: Regex,
    validate: fn(&Captures) -> bool,
}

lazy_static::lazy_static! {
    static ref RULES: Vec<Rule> = vec![
        // DD.MM.YYYY
        Rule {
            label: FieldType::Date,
            pattern: Regex::new(r"^(?P<day>[0-9]{2})\.(?P<month>[0-9]{2})\.(?P<year>[0-9]{4})$").unwrap(),
            validate: is_valid_date,
        },
        // YYYY-MM-DD
        Rule {
            label: FieldType::Date,
            pattern: Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$").unwrap(),
            validate: is_valid_date,
        },
        // +7 XXX XXX XX XX
        Rule {
            label: FieldType::Phone,
            pattern: Regex::new(r"^\+7 [0-9]{3} [0-9]{3} [0-9]{2} [0-9]{2}$").unwrap(),
            validate: accept,
        },
        Rule {
            label: FieldType::Email,
            pattern: Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap(),
            validate: accept,
        },
    ];
}

fn accept(_: &Captures) -> bool {
    true
}

/// 日付の範囲検証
///
/// 月の日数・閏年は見ない（1〜31日を一律に許容）。
fn is_valid_date(caps: &Captures) -> bool {
    let part = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

    match (part("day"), part("month"), part("year")) {
        (Some(day), Some(month), Some(year)) => {
            (1..=12).contains(&month) && (1..=31).contains(&day) && year >= 1900
        }
        _ => false,
    }
}

/// 値の型を判定
pub fn classify(value: &str) -> FieldType {
    RULES
        .iter()
        .find(|rule| {
            rule.pattern
                .captures(value)
                .is_some_and(|caps| (rule.validate)(&caps))
        })
        .map(|rule| rule.label)
        .unwrap_or(FieldType::Text)
}

/// 全フィールドの型を判定（キーと順序を保持）
pub fn classify_all(fields: &FieldSet) -> TypeMap {
    fields
        .iter()
        .map(|(name, value)| (name, classify(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_date() {
        let valid = ["27.05.2025", "01.01.2020", "2025-05-27", "2020-01-01", "31.02.1900"];
        for value in valid {
            assert_eq!(classify(value), FieldType::Date, "{} should be a date", value);
        }
    }

    #[test]
    fn test_classify_date_out_of_range_falls_through() {
        let invalid = [
            "32.05.2025", // 日
            "27.13.2025", // 月
            "00.05.2025",
            "27.00.2025",
            "27.05.1899", // 年
            "2025-13-01",
            "2025-05-32",
            "1899-12-31",
        ];
        for value in invalid {
            assert_eq!(classify(value), FieldType::Text, "{} should not be a date", value);
        }
    }

    #[test]
    fn test_classify_date_bad_shape() {
        let invalid = ["27/05/2025", "2025/05/27", "27.05.25", "7.05.2025", "2025-5-27", "not-a-date"];
        for value in invalid {
            assert_ne!(classify(value), FieldType::Date, "{} should not be a date", value);
        }
    }

    #[test]
    fn test_classify_phone() {
        assert_eq!(classify("+7 903 123 45 67"), FieldType::Phone);
        assert_eq!(classify("+7 999 888 77 66"), FieldType::Phone);

        let invalid = [
            "89031234567",
            "+79031234567",
            "7 903 123 45 67",
            "+7 903 123 45 6",
            "+7 903 123 45 678",
            "+7  903 123 45 67",
            "+7\t903 123 45 67",
            " +7 903 123 45 67",
            "телефон",
        ];
        for value in invalid {
            assert_ne!(classify(value), FieldType::Phone, "{} should not be a phone", value);
        }
    }

    #[test]
    fn test_classify_email() {
        let valid = ["test@example.com", "user.name@domain.co.uk", "user+tag@example.org"];
        for value in valid {
            assert_eq!(classify(value), FieldType::Email, "{} should be an email", value);
        }

        let invalid = ["invalid", "invalid@", "@domain.com", "invalid@domain", "no-at-sign", "a@b.c1"];
        for value in invalid {
            assert_ne!(classify(value), FieldType::Email, "{} should not be an email", value);
        }
    }

    #[test]
    fn test_classify_anchored() {
        assert_eq!(classify("on 27.05.2025"), FieldType::Text);
        assert_eq!(classify("27.05.2025 "), FieldType::Text);
        assert_eq!(classify("mail: test@example.com"), FieldType::Text);
        assert_eq!(classify("+7 903 123 45 67 доб. 1"), FieldType::Text);
    }

    #[test]
    fn test_classify_text_fallback() {
        assert_eq!(classify(""), FieldType::Text);
        assert_eq!(classify("plain text"), FieldType::Text);
        assert_eq!(classify("12345"), FieldType::Text);
    }

    #[test]
    fn test_classify_deterministic() {
        for value in ["27.05.2025", "+7 903 123 45 67", "x@y.ru", "", "abc"] {
            assert_eq!(classify(value), classify(value));
        }
    }

    #[test]
    fn test_classify_all() {
        let fields: FieldSet = [
            ("field1", "27.05.2025"),
            ("field2", "+7 903 123 45 67"),
            ("field3", "test@example.com"),
            ("field4", "plain text"),
            ("field5", "2024-01-15"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

        let types = classify_all(&fields);

        let expected = vec![
            ("field1", FieldType::Date),
            ("field2", FieldType::Phone),
            ("field3", FieldType::Email),
            ("field4", FieldType::Text),
            ("field5", FieldType::Date),
        ];
        let actual: Vec<(&str, FieldType)> = types.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_classify_all_empty() {
        assert!(classify_all(&FieldSet::new()).is_empty());
    }
}
