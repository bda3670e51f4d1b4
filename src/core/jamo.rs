//! 호환용 자모 문자 -> 음절 구성 인덱스 분류
//!
//! 조합기(Assembler)의 입력 단위는 호환용 자모 한 글자입니다.
//! 같은 자음이라도 초성 자리와 종성 자리의 인덱스가 다르므로
//! 분류 결과에 두 인덱스를 함께 담습니다.

use crate::core::unicode::{CHOSEONG_JAMO, JONGSEONG_JAMO, JUNGSEONG_JAMO};

/// 분류된 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음
    /// - cho: 초성 인덱스 (ㄳ, ㄺ 등 복합 종성 자모는 초성 불가 -> None)
    /// - jong: 종성 인덱스 (ㄸ, ㅃ, ㅉ는 종성 불가 -> None)
    Consonant { cho: Option<u32>, jong: Option<u32> },
    /// 모음 (jung: 중성 인덱스)
    Vowel { jung: u32 },
}

impl Jamo {
    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel { .. })
    }
}

/// 호환용 자모 문자 하나를 분류
/// 자모가 아닌 문자(완성형 음절, 숫자, 특수문자 등)는 None
pub fn classify(c: char) -> Option<Jamo> {
    if let Some(jung) = JUNGSEONG_JAMO.iter().position(|&j| j == c) {
        return Some(Jamo::Vowel { jung: jung as u32 });
    }

    let cho = CHOSEONG_JAMO
        .iter()
        .position(|&j| j == c)
        .map(|i| i as u32);
    let jong = JONGSEONG_JAMO
        .iter()
        .skip(1)
        .position(|&j| j == c)
        .map(|i| i as u32 + 1);

    if cho.is_some() || jong.is_some() {
        Some(Jamo::Consonant { cho, jong })
    } else {
        None
    }
}
