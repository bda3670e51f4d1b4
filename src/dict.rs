//! 예제 단어 사전 (협력자)
//!
//! 발음 엔진 시연용 고정 단어 목록입니다. 엔진의 어떤 규칙도 이 목록을
//! 읽지 않습니다. is_verb 표시는 호출 측이 PhonemizeOptions로 전달하지만
//! 현재 소비되지 않습니다.

use serde::Serialize;

/// 사전 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictEntry {
    /// 표기
    pub word: &'static str,
    /// 영문 뜻
    pub translation: &'static str,
    /// 분류 (적용되는 대표 규칙 포함)
    pub category: &'static str,
    /// 동사 여부
    pub is_verb: bool,
}

const fn entry(word: &'static str, translation: &'static str, category: &'static str) -> DictEntry {
    DictEntry {
        word,
        translation,
        category,
        is_verb: false,
    }
}

const fn verb(word: &'static str, translation: &'static str, category: &'static str) -> DictEntry {
    DictEntry {
        word,
        translation,
        category,
        is_verb: true,
    }
}

/// 내장 예제 단어
#[rustfmt::skip]
pub const ENTRIES: &[DictEntry] = &[
    entry("안녕하세요", "Hello", "Basic"),
    entry("감사합니다", "Thank you", "Basic"),
    entry("옷이", "Clothes (subject)", "Liaison"),
    entry("국물", "Broth", "Nasalization"),
    entry("신라", "Silla dynasty", "Liquidization"),
    entry("종로", "Jongno", "Nasalization"),
    entry("학교", "School", "Tensification"),
    entry("식당", "Restaurant", "Tensification"),
    entry("비빔밥", "Bibimbap", "Tensification"),
    verb("같이", "Together", "Palatalization"),
    verb("좋다", "To be good", "Aspiration"),
    verb("닫히다", "To be closed", "Aspiration"),
    entry("닭", "Chicken", "Simplification"),
    entry("값", "Price", "Simplification"),
    verb("맛있다", "To be delicious", "Exception"),
    entry("꽃잎", "Petal", "Exception"),
];

/// 표기로 항목 조회
pub fn find(word: &str) -> Option<&'static DictEntry> {
    ENTRIES.iter().find(|e| e.word == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let e = find("국물").unwrap();
        assert_eq!(e.translation, "Broth");
        assert!(!e.is_verb);

        let e = find("좋다").unwrap();
        assert!(e.is_verb);

        assert!(find("없는단어").is_none());
    }

    #[test]
    fn test_entries_have_unique_words() {
        for (i, a) in ENTRIES.iter().enumerate() {
            for b in &ENTRIES[i + 1..] {
                assert_ne!(a.word, b.word);
            }
        }
    }
}
