//! 발음 변환 오케스트레이션
//!
//! 호출마다 셀 시퀀스와 트레이스를 새로 만들어 여섯 패스를 정확히 한 번씩
//! 돌립니다. 엔진 상태가 따로 없으므로 호출자마다 독립적으로 재진입 가능합니다.

use serde::Serialize;

use crate::core::unicode::compose;
use crate::phonology::cell::Cell;
use crate::phonology::exceptions;
use crate::phonology::rules;

/// 규칙 적용 기록 한 건
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    /// 규칙이 적용된 셀 인덱스 (입력 문자 기준)
    pub index: usize,
    /// 규칙 라벨
    pub rule: String,
    /// 사람이 읽는 설명
    pub description: String,
}

impl TraceEntry {
    pub(crate) fn new(index: usize, rule: &str, description: String) -> TraceEntry {
        TraceEntry {
            index,
            rule: rule.to_string(),
            description,
        }
    }
}

/// 변환 옵션
#[derive(Debug, Clone, Copy, Default)]
pub struct PhonemizeOptions {
    /// 호출 측(예제 사전)이 넘겨주는 동사 여부 표시.
    /// 현재 어떤 패스도 읽지 않음 — 규칙에 연결하지 말 것.
    pub is_verb: bool,
}

/// 변환 결과
///
/// 재생(TTS) 협력자에게는 pronounced가 아니라 original을 넘기는 것이
/// 기존 계약입니다. 의도된 동작이므로 바꾸지 마세요.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phonemized {
    /// 입력 원문
    pub original: String,
    /// 발음 표기
    pub pronounced: String,
    /// 패스 발생 순서대로의 규칙 기록
    pub trace: Vec<TraceEntry>,
}

/// 한글 문자열의 표준 발음을 도출
pub fn phonemize(text: &str) -> Phonemized {
    phonemize_with(text, &PhonemizeOptions::default())
}

/// 옵션을 지정한 발음 변환
pub fn phonemize_with(text: &str, _options: &PhonemizeOptions) -> Phonemized {
    // 0. 단어 전체 예외 — 적중하면 파이프라인 전체 생략
    if let Some(ex) = exceptions::lookup(text) {
        log::debug!("예외 표 적중: {} -> {}", text, ex.pronounced);
        return Phonemized {
            original: text.to_string(),
            pronounced: ex.pronounced.to_string(),
            trace: vec![TraceEntry::new(0, ex.rule, ex.description.to_string())],
        };
    }

    // 1. 입력을 셀 시퀀스로 분해
    let mut cells: Vec<Cell> = text.chars().map(Cell::from_char).collect();
    let mut trace = Vec::new();

    // 2. 여섯 패스, 고정 순서
    rules::apply_resyllabification(&mut cells, &mut trace);
    rules::apply_aspiration(&mut cells, &mut trace);
    rules::apply_palatalization(&mut cells, &mut trace);
    rules::apply_assimilation(&mut cells, &mut trace);
    rules::apply_tensification(&mut cells, &mut trace);
    rules::apply_final_normalization(&mut cells, &mut trace);

    // 3. 재조합
    let mut pronounced = String::with_capacity(text.len());
    for cell in &cells {
        match cell {
            Cell::Hangul {
                cho, jung, jong, ..
            } => {
                if let Some(c) = compose(*cho, *jung, *jong) {
                    pronounced.push(c);
                }
            }
            Cell::Other(c) => pronounced.push(*c),
        }
    }

    log::debug!("{} -> {} ({}개 규칙)", text, pronounced, trace.len());

    Phonemized {
        original: text.to_string(),
        pronounced,
        trace,
    }
}
