//! 통합 테스트 - 발음 변환 시나리오와 조합기 동작

use baleum::{phonemize, Assembler};

#[test]
fn test_resyllabification() {
    let result = phonemize("옷이");
    assert_eq!(result.pronounced, "오시");
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace[0].rule, "Resyllabification");
}

#[test]
fn test_complex_resyllabification_tensifies_moved_s() {
    assert_eq!(phonemize("값이").pronounced, "갑씨");
}

#[test]
fn test_nasalization() {
    let result = phonemize("국물");
    assert_eq!(result.pronounced, "궁물");
    assert_eq!(result.trace[0].rule, "Nasalization");
    assert_eq!(result.trace[0].index, 0);
}

#[test]
fn test_palatalization() {
    // 같이: 연음으로 ㅌ이 넘어간 뒤에야 구개음화
    let result = phonemize("같이");
    assert_eq!(result.pronounced, "가치");
    let rules: Vec<&str> = result.trace.iter().map(|t| t.rule.as_str()).collect();
    assert_eq!(rules, vec!["Resyllabification", "Palatalization"]);
}

#[test]
fn test_palatalization_respects_written_form() {
    // 표기가 이미 '디'인 단어는 그대로 읽힘
    assert_eq!(phonemize("잔디").pronounced, "잔디");
    assert_eq!(phonemize("라디오").pronounced, "라디오");
}

#[test]
fn test_aspiration_forward() {
    let result = phonemize("좋다");
    assert_eq!(result.pronounced, "조타");
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace[0].rule, "Aspiration");
}

#[test]
fn test_aspiration_then_palatalization_chain() {
    // 닫히다 -> 다티다 -> 다치다: 격음화가 구개음화보다 먼저라서 성립하는 연쇄
    let result = phonemize("닫히다");
    assert_eq!(result.pronounced, "다치다");
    let rules: Vec<&str> = result.trace.iter().map(|t| t.rule.as_str()).collect();
    assert_eq!(rules, vec!["Aspiration", "Palatalization"]);
}

#[test]
fn test_tensification() {
    let result = phonemize("학교");
    assert_eq!(result.pronounced, "학꾜");
    assert_eq!(result.trace[0].rule, "Tensification");
    assert_eq!(result.trace[0].index, 1);
}

#[test]
fn test_liquidization() {
    let result = phonemize("신라");
    assert_eq!(result.pronounced, "실라");
    assert_eq!(result.trace[0].rule, "Liquidization");

    assert_eq!(phonemize("설날").pronounced, "설랄");
}

#[test]
fn test_mutual_nasalization() {
    // 백리: 폐쇄음과 ㄹ이 동시에 비음으로, 레코드는 하나
    let result = phonemize("백리");
    assert_eq!(result.pronounced, "뱅니");
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace[0].rule, "Nasalization (Mutual)");
}

#[test]
fn test_final_normalization_standalone() {
    // 인접 규칙이 없을 때는 대표음 정리만
    let result = phonemize("닭");
    assert_eq!(result.pronounced, "닥");
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace[0].rule, "Simplification");
}

#[test]
fn test_multiple_rules_in_one_word() {
    // 맑다: 경음화 + 대표음 정리
    let result = phonemize("맑다");
    assert_eq!(result.pronounced, "막따");
    let rules: Vec<&str> = result.trace.iter().map(|t| t.rule.as_str()).collect();
    assert_eq!(rules, vec!["Tensification", "Simplification"]);
}

#[test]
fn test_exception_table_short_circuit() {
    let result = phonemize("맛있다");
    assert_eq!(result.pronounced, "마시따");
    assert_eq!(result.trace.len(), 1);

    let result = phonemize("꽃잎");
    assert_eq!(result.pronounced, "꼰닙");
    assert_eq!(result.trace[0].rule, "Compound Word Exception");
}

#[test]
fn test_other_chars_block_rules() {
    // 공백 너머로는 어떤 규칙도 보지 않음
    let result = phonemize("국 물");
    assert_eq!(result.pronounced, "국 물");
    assert!(result.trace.is_empty());
}

#[test]
fn test_mixed_text_passthrough() {
    let result = phonemize("ABC 국물 123");
    assert_eq!(result.pronounced, "ABC 궁물 123");
    assert_eq!(result.trace.len(), 1);
    assert_eq!(result.trace[0].index, 4); // '국'의 문자 인덱스
}

#[test]
fn test_assembler_basic_flow() {
    let mut asm = Assembler::new();
    assert_eq!(asm.add('ㄱ'), "ㄱ");
    assert_eq!(asm.add('ㅏ'), "가");
    assert_eq!(asm.add('ㄴ'), "간");
    assert_eq!(asm.backspace(), "가");
}

#[test]
fn test_assembler_resyllabifies_on_vowel() {
    let mut asm = Assembler::new();
    for c in ['ㄱ', 'ㅏ', 'ㄴ'] {
        asm.add(c);
    }
    assert_eq!(asm.add('ㅏ'), "가나");
}

#[test]
fn test_assembler_compound_coda_split_on_vowel() {
    let mut asm = Assembler::new();
    for c in ['ㅇ', 'ㅏ', 'ㄹ', 'ㄱ'] {
        asm.add(c);
    }
    assert_eq!(asm.add('ㅡ'), "알그");
}

#[test]
fn test_assembler_clear() {
    let mut asm = Assembler::new();
    asm.add('ㄱ');
    asm.add('ㅏ');
    assert_eq!(asm.clear(), "");
    assert_eq!(asm.add('ㅎ'), "ㅎ");
}

#[test]
fn test_assembler_independent_of_phonemizer() {
    // 조합기는 표기만 쌓음 — 발음 규칙은 조합 결과에 적용되지 않음
    let mut asm = Assembler::new();
    let mut out = String::new();
    for c in ['ㄱ', 'ㅜ', 'ㄱ', 'ㅁ', 'ㅜ', 'ㄹ'] {
        out = asm.add(c);
    }
    assert_eq!(out, "국물");
    assert_eq!(phonemize(&out).pronounced, "궁물");
}
