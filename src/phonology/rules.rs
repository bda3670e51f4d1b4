//! 발음 규칙 여섯 패스
//!
//! 고정 순서: 연음 -> 격음화 -> 구개음화 -> 동화(비음화/유음화) -> 경음화 -> 대표음 정리.
//! 각 패스는 인접 셀 쌍 (i, i+1)을 한 번씩 훑고, 실제로 바꾼 셀마다
//! 트레이스 레코드를 하나 남깁니다. Other 셀은 양쪽 어느 규칙도 넘지 못하는 경계.

use crate::core::unicode::{
    choseong_jamo, jongseong_jamo, jongseong_to_choseong, split_jongseong,
};
use crate::phonology::cell::{Cell, Rep};
use crate::phonology::phonemizer::TraceEntry;

/// 평음 초성 -> 격음 초성 (ㄱ->ㅋ, ㄷ->ㅌ, ㅂ->ㅍ, ㅈ->ㅊ)
fn aspirate(cho: u32) -> Option<u32> {
    match cho {
        0 => Some(15),
        3 => Some(16),
        7 => Some(17),
        12 => Some(14),
        _ => None,
    }
}

/// 평음 초성 -> 경음 초성 (ㄱ->ㄲ, ㄷ->ㄸ, ㅂ->ㅃ, ㅅ->ㅆ, ㅈ->ㅉ)
fn tensify(cho: u32) -> Option<u32> {
    match cho {
        0 => Some(1),
        3 => Some(4),
        7 => Some(8),
        9 => Some(10),
        12 => Some(13),
        _ => None,
    }
}

/// 대표음 K/T/P -> 대응 비음 종성 (ㄱ->ㅇ, ㄷ->ㄴ, ㅂ->ㅁ)
fn nasalize(rep: Rep) -> Option<u32> {
    match rep {
        Rep::K => Some(21),
        Rep::T => Some(4),
        Rep::P => Some(16),
        _ => None,
    }
}

/// 종성에 숨은 평폐쇄음의 초성 인덱스 (역방향 격음화 조건)
/// 대표음으로는 드러나지 않는 복합 종성의 폐쇄음(ㄵ의 ㅈ, ㄼ의 ㅂ)을 우선 적용
fn base_stop(jong: u32) -> Option<u32> {
    match jong {
        5 => Some(12), // ㄵ -> ㅈ
        11 => Some(7), // ㄼ -> ㅂ
        _ => match Rep::of(jong) {
            Some(Rep::K) => Some(0), // ㄱ
            Some(Rep::T) => Some(3), // ㄷ
            Some(Rep::P) => Some(7), // ㅂ
            _ => None,
        },
    }
}

/// 패스 1: 연음 (받침의 초성 이동)
///
/// 조건: 현재 셀에 종성이 있고 다음 셀 초성이 ㅇ(무음 자리).
/// ㅎ 받침은 이동 대신 탈락, ㅇ 받침은 이동하지 않음.
/// 복합 종성은 분리 — 왼쪽은 남고 오른쪽이 이동하되, 이동하는 ㅎ은 탈락,
/// 이동하는 ㅅ은 ㅆ으로 경음화 (값이 -> 갑씨).
pub fn apply_resyllabification(cells: &mut [Cell], trace: &mut Vec<TraceEntry>) {
    for i in 0..cells.len().saturating_sub(1) {
        let (left, right) = cells.split_at_mut(i + 1);
        let (Cell::Hangul { jong, .. }, Cell::Hangul { cho: next_cho, .. }) =
            (&mut left[i], &mut right[0])
        else {
            continue;
        };
        if *jong == 0 || *next_cho != 11 {
            continue;
        }

        if *jong == 27 {
            // ㅎ 받침: 모음 앞에서 탈락
            trace.push(TraceEntry::new(
                i,
                "ㅎ-Deletion",
                "ㅎ disappears before a vowel.".to_string(),
            ));
            *jong = 0;
        } else if *jong == 21 {
            // ㅇ 받침(NG)은 이동하지 않음
        } else if let Some((remain, moved_cho)) = split_jongseong(*jong) {
            let jong_char = jongseong_jamo(*jong).unwrap_or('\0');
            if moved_cho == 18 {
                // 분리된 ㅎ은 소리 없이 사라짐 (앓아 -> 아라)
                trace.push(TraceEntry::new(
                    i,
                    "Resyllabification (Complex)",
                    format!("{} splits, ㅎ is silent.", jong_char),
                ));
                *jong = remain;
            } else {
                let remain_char = jongseong_jamo(remain).unwrap_or('\0');
                let moved_char = choseong_jamo(moved_cho).unwrap_or('\0');
                trace.push(TraceEntry::new(
                    i,
                    "Resyllabification (Complex)",
                    format!(
                        "{} splits: {} stays, {} moves to next syllable.",
                        jong_char, remain_char, moved_char
                    ),
                ));
                *jong = remain;
                // 복합 종성에서 이동한 ㅅ은 ㅆ으로 굳어짐
                *next_cho = if moved_cho == 9 { 10 } else { moved_cho };
            }
        } else if let Some(moved_cho) = jongseong_to_choseong(*jong) {
            let jong_char = jongseong_jamo(*jong).unwrap_or('\0');
            trace.push(TraceEntry::new(
                i,
                "Resyllabification",
                format!("{} moves to replace the empty initial sound.", jong_char),
            ));
            *jong = 0;
            *next_cho = moved_cho;
        }
    }
}

/// 패스 2: 격음화 (ㅎ 축약)
///
/// 순방향: ㅎ 계열 받침(ㅎ, ㄶ, ㅀ) + 평음 초성 -> 초성이 격음으로, 받침은 잔여로 축소.
/// 역방향: 폐쇄음 받침 + ㅎ 초성 -> 초성이 격음으로.
/// 구개음화보다 먼저 돌아야 닫히다 -> 다티다 -> 다치다 연쇄가 성립.
pub fn apply_aspiration(cells: &mut [Cell], trace: &mut Vec<TraceEntry>) {
    for i in 0..cells.len().saturating_sub(1) {
        let (left, right) = cells.split_at_mut(i + 1);
        let (Cell::Hangul { jong, .. }, Cell::Hangul { cho: next_cho, .. }) =
            (&mut left[i], &mut right[0])
        else {
            continue;
        };

        // 순방향: ㅎ(27), ㄶ(6), ㅀ(15) 받침 + ㄱ/ㄷ/ㅂ/ㅈ 초성
        if matches!(*jong, 27 | 6 | 15) {
            if let Some(asp) = aspirate(*next_cho) {
                let base_char = choseong_jamo(*next_cho).unwrap_or('\0');
                let asp_char = choseong_jamo(asp).unwrap_or('\0');
                trace.push(TraceEntry::new(
                    i,
                    "Aspiration",
                    format!("ㅎ merges with {} to form {}.", base_char, asp_char),
                ));
                *jong = match *jong {
                    6 => 4,  // ㄶ -> ㄴ
                    15 => 8, // ㅀ -> ㄹ
                    _ => 0,  // ㅎ -> 없음
                };
                *next_cho = asp;
                continue;
            }
        }

        // 역방향: 폐쇄음 받침 + ㅎ 초성
        if *next_cho == 18 {
            if let Some(asp) = base_stop(*jong).and_then(aspirate) {
                let jong_char = jongseong_jamo(*jong).unwrap_or('\0');
                let asp_char = choseong_jamo(asp).unwrap_or('\0');
                trace.push(TraceEntry::new(
                    i,
                    "Aspiration",
                    format!("{} merges with ㅎ to form {}.", jong_char, asp_char),
                ));
                // 복합 종성은 폐쇄음만 내주고 나머지가 남음
                *jong = match *jong {
                    9 | 11 | 13 => 8, // ㄺ, ㄼ, ㄾ -> ㄹ
                    5 => 4,           // ㄵ -> ㄴ
                    _ => 0,
                };
                *next_cho = asp;
            }
        }
    }
}

/// 패스 3: 구개음화
///
/// 현재 초성이 ㄷ/ㅌ이고 중성이 ㅣ일 때 ㅈ/ㅊ으로.
/// 단, 원래 표기가 이미 ㄷ/ㅌ + ㅣ였던 음절(잔디, 티끌 등)은 표기대로 읽히므로 제외 —
/// 연음이나 격음화로 ㄷ/ㅌ이 *파생된* 경우에만 적용됩니다.
pub fn apply_palatalization(cells: &mut [Cell], trace: &mut Vec<TraceEntry>) {
    for i in 0..cells.len().saturating_sub(1) {
        let (left, right) = cells.split_at_mut(i + 1);
        let (
            Cell::Hangul { .. },
            Cell::Hangul {
                cho: next_cho,
                jung: next_jung,
                original,
                ..
            },
        ) = (&mut left[i], &mut right[0])
        else {
            continue;
        };
        if !matches!(*next_cho, 3 | 16) || *next_jung != 20 {
            continue;
        }

        // 표기 기준 검사: 원문 초성이 이미 ㄷ/ㅌ이면 건너뜀
        if let Some((orig_cho, _, _)) = crate::core::unicode::decompose(*original) {
            if matches!(orig_cho, 3 | 16) {
                continue;
            }
        }

        let (from, to) = if *next_cho == 3 { ('ㄷ', 12) } else { ('ㅌ', 14) };
        let to_char = choseong_jamo(to).unwrap_or('\0');
        trace.push(TraceEntry::new(
            i + 1,
            "Palatalization",
            format!("{} becomes {} before ㅣ.", from, to_char),
        ));
        *next_cho = to;
    }
}

/// 패스 4: 동화 (비음화 + 유음화, 쌍마다 우선순위 적용, 첫 일치에서 종료)
///
/// a. 유음화: N 받침 + ㄹ 초성 또는 L 받침 + ㄴ 초성 -> 둘 다 ㄹ.
/// b. 비음화: K/T/P 받침 + ㄴ/ㅁ 초성 -> 받침이 대응 비음으로.
/// c. ㄹ 초성 앞: M/NG 받침이면 ㄹ -> ㄴ, K/T/P 받침이면 받침과 초성이
///    동시에 비음으로 (백리 -> 뱅니, 레코드 하나).
pub fn apply_assimilation(cells: &mut [Cell], trace: &mut Vec<TraceEntry>) {
    for i in 0..cells.len().saturating_sub(1) {
        let (left, right) = cells.split_at_mut(i + 1);
        let (Cell::Hangul { jong, .. }, Cell::Hangul { cho: next_cho, .. }) =
            (&mut left[i], &mut right[0])
        else {
            continue;
        };
        let Some(rep) = Rep::of(*jong) else {
            continue;
        };

        // a. 유음화
        if (rep == Rep::N && *next_cho == 5) || (rep == Rep::L && *next_cho == 2) {
            trace.push(TraceEntry::new(
                i,
                "Liquidization",
                "ㄴ and ㄹ meet to become ㄹㄹ.".to_string(),
            ));
            *jong = 8; // ㄹ
            *next_cho = 5; // ㄹ
            continue;
        }

        // b. 폐쇄음 + 비음
        let mut rep = rep;
        if matches!(rep, Rep::K | Rep::T | Rep::P) && matches!(*next_cho, 2 | 6) {
            if let Some(nasal) = nasalize(rep) {
                let stop_char = jongseong_jamo(rep.jongseong()).unwrap_or('\0');
                let nasal_char = jongseong_jamo(nasal).unwrap_or('\0');
                let next_char = choseong_jamo(*next_cho).unwrap_or('\0');
                trace.push(TraceEntry::new(
                    i,
                    "Nasalization",
                    format!(
                        "Stop {} becomes nasal {} before {}.",
                        stop_char, nasal_char, next_char
                    ),
                ));
                *jong = nasal;
                // 같은 쌍의 c 검사는 바뀐 받침 기준
                rep = Rep::of(nasal).unwrap_or(rep);
            }
        }

        // c. ㄹ 초성의 비음화
        if *next_cho == 5 {
            if matches!(rep, Rep::M | Rep::Ng) {
                trace.push(TraceEntry::new(
                    i + 1,
                    "Nasalization",
                    "ㄹ becomes ㄴ after nasal.".to_string(),
                ));
                *next_cho = 2; // ㄴ
            } else if let Some(nasal) = nasalize(rep) {
                // 폐쇄음 + ㄹ: 하나의 제약, 두 음 변화, 레코드 하나
                trace.push(TraceEntry::new(
                    i,
                    "Nasalization (Mutual)",
                    "Stop + ㄹ interaction: Both change to nasals.".to_string(),
                ));
                *jong = nasal;
                *next_cho = 2; // ㄴ
            }
        }
    }
}

/// 패스 5: 경음화
///
/// K/T/P 받침 뒤 평음 초성 ㄱ/ㄷ/ㅂ/ㅅ/ㅈ이 ㄲ/ㄸ/ㅃ/ㅆ/ㅉ으로 굳어짐.
pub fn apply_tensification(cells: &mut [Cell], trace: &mut Vec<TraceEntry>) {
    for i in 0..cells.len().saturating_sub(1) {
        let (left, right) = cells.split_at_mut(i + 1);
        let (Cell::Hangul { jong, .. }, Cell::Hangul { cho: next_cho, .. }) =
            (&mut left[i], &mut right[0])
        else {
            continue;
        };
        if !matches!(Rep::of(*jong), Some(Rep::K | Rep::T | Rep::P)) {
            continue;
        }
        if let Some(tense) = tensify(*next_cho) {
            let plain_char = choseong_jamo(*next_cho).unwrap_or('\0');
            let tense_char = choseong_jamo(tense).unwrap_or('\0');
            trace.push(TraceEntry::new(
                i + 1,
                "Tensification",
                format!(
                    "Initial {} hardens to {} after stop sound.",
                    plain_char, tense_char
                ),
            ));
            *next_cho = tense;
        }
    }
}

/// 패스 6: 대표음 정리
///
/// 앞 다섯 패스가 건드리지 않고 남은 종성(어말, 또는 규칙이 성립하지 않은
/// 자음 앞)을 대표음의 단순 종성으로 접음. 닭 -> 닥, 값 -> 갑.
pub fn apply_final_normalization(cells: &mut [Cell], trace: &mut Vec<TraceEntry>) {
    for (i, cell) in cells.iter_mut().enumerate() {
        let Cell::Hangul { jong, .. } = cell else {
            continue;
        };
        let Some(rep) = Rep::of(*jong) else {
            continue;
        };
        let rep_jong = rep.jongseong();
        if rep_jong != *jong {
            let from = jongseong_jamo(*jong).unwrap_or('\0');
            let to = jongseong_jamo(rep_jong).unwrap_or('\0');
            trace.push(TraceEntry::new(
                i,
                "Simplification",
                format!("{} simplifies to {}.", from, to),
            ));
            *jong = rep_jong;
        }
    }
}
