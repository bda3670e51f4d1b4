//! 단어 전체 단위 발음 예외 표
//!
//! 규칙 파이프라인이 도출할 수 없는 관용 발음과 합성어 ㄴ첨가를
//! 입력 문자열 전체 키로 조회합니다. 적중하면 여섯 패스를 모두 건너뜁니다.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 예외 항목
#[derive(Debug, Clone, Copy)]
pub struct Exception {
    /// 실제 발음
    pub pronounced: &'static str,
    /// 규칙 라벨 (트레이스에 그대로 노출)
    pub rule: &'static str,
    /// 설명
    pub description: &'static str,
}

lazy_static! {
    static ref EXCEPTIONS: HashMap<&'static str, Exception> = {
        let mut m = HashMap::new();
        m.insert(
            "맛있다",
            Exception {
                pronounced: "마시따",
                rule: "Exception (Accepted Pronunciation)",
                description:
                    "Standard allowance: [마딛따] is the rule, but [마시따] is widely accepted.",
            },
        );
        m.insert(
            "멋있다",
            Exception {
                pronounced: "머시따",
                rule: "Exception (Accepted Pronunciation)",
                description:
                    "Standard allowance: [머딛따] is the rule, but [머시따] is widely accepted.",
            },
        );
        m.insert(
            "꽃잎",
            Exception {
                pronounced: "꼰닙",
                rule: "Compound Word Exception",
                description: "ㄴ-Insertion rule applies in this compound word.",
            },
        );
        m.insert(
            "깻잎",
            Exception {
                pronounced: "깬닙",
                rule: "Compound Word Exception",
                description: "ㄴ-Insertion rule applies in this compound word.",
            },
        );
        m.insert(
            "나뭇잎",
            Exception {
                pronounced: "나문닙",
                rule: "Compound Word Exception",
                description: "ㄴ-Insertion rule applies in this compound word.",
            },
        );
        m
    };
}

/// 입력 문자열 전체로 예외 조회
pub fn lookup(text: &str) -> Option<&'static Exception> {
    EXCEPTIONS.get(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit() {
        let ex = lookup("맛있다").unwrap();
        assert_eq!(ex.pronounced, "마시따");
        assert_eq!(ex.rule, "Exception (Accepted Pronunciation)");

        let ex = lookup("나뭇잎").unwrap();
        assert_eq!(ex.pronounced, "나문닙");
        assert_eq!(ex.rule, "Compound Word Exception");
    }

    #[test]
    fn test_lookup_is_whole_string_only() {
        // 부분 문자열이나 포함 문자열은 적중하지 않음
        assert!(lookup("맛있").is_none());
        assert!(lookup("맛있다요").is_none());
        assert!(lookup("국물").is_none());
        assert!(lookup("").is_none());
    }
}
