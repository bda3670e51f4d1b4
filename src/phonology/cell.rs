//! 발음 규칙 적용 단위인 음절 셀과 종성 대표음 분류

use crate::core::unicode::decompose;

/// 규칙 파이프라인이 다루는 한 칸
///
/// 규칙은 인덱스 필드만 바꿉니다. 셀 수는 변하지 않으며,
/// Other 칸은 어떤 규칙도 넘어다보지 않는 경계로 작동합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// 완성형 한글 음절
    /// original은 입력 당시의 문자 — 표기 기준 예외 판정(구개음화)에 필요
    Hangul {
        cho: u32,
        jung: u32,
        jong: u32,
        original: char,
    },
    /// 한글이 아닌 문자, 규칙 불투과
    Other(char),
}

impl Cell {
    /// 입력 문자 하나를 셀로 변환
    pub fn from_char(c: char) -> Cell {
        match decompose(c) {
            Some((cho, jung, jong)) => Cell::Hangul {
                cho,
                jung,
                jong,
                original: c,
            },
            None => Cell::Other(c),
        }
    }
}

/// 종성 대표음 7분류
///
/// 대부분의 규칙은 종성 인덱스가 아니라 이 분류를 조건으로 검사합니다.
/// 분류는 문맥과 무관한 고정 표입니다. ㄺ, ㄼ처럼 실제로는 뒤따르는
/// 활용형에 따라 달라지는 어휘 예외가 존재하지만, 여기서는 표준 표를
/// 그대로 따릅니다 (알려진 근사).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rep {
    K,
    N,
    T,
    L,
    M,
    P,
    Ng,
}

impl Rep {
    /// 종성 인덱스의 대표음 (0 = 종성 없음 -> None)
    #[rustfmt::skip]
    pub fn of(jong: u32) -> Option<Rep> {
        match jong {
            0 => None,
            1 | 2 | 3 | 9 | 24 => Some(Rep::K),       // ㄱ ㄲ ㄳ ㄺ ㅋ
            4 | 5 | 6 => Some(Rep::N),                // ㄴ ㄵ ㄶ
            7 | 19 | 20 | 22 | 23 | 25 | 27 => Some(Rep::T), // ㄷ ㅅ ㅆ ㅈ ㅊ ㅌ ㅎ
            8 | 11 | 12 | 13 | 15 => Some(Rep::L),    // ㄹ ㄼ ㄽ ㄾ ㅀ
            10 | 16 => Some(Rep::M),                  // ㄻ ㅁ
            14 | 17 | 18 | 26 => Some(Rep::P),        // ㄿ ㅂ ㅄ ㅍ
            21 => Some(Rep::Ng),                      // ㅇ
            _ => None,
        }
    }

    /// 대표음이 표기되는 단순 종성 인덱스
    pub fn jongseong(self) -> u32 {
        match self {
            Rep::K => 1,   // ㄱ
            Rep::N => 4,   // ㄴ
            Rep::T => 7,   // ㄷ
            Rep::L => 8,   // ㄹ
            Rep::M => 16,  // ㅁ
            Rep::P => 17,  // ㅂ
            Rep::Ng => 21, // ㅇ
        }
    }
}
