//! 자모 단위 입력으로 음절을 쌓는 조합기
//!
//! 가상 키보드가 키 하나를 누를 때마다 호출합니다. 내부에는 입력 자모
//! 버퍼만 남기고, 모든 연산이 버퍼 전체를 처음부터 다시 재생해 문자열을
//! 만듭니다. 백스페이스 뒤에도 중간 상태가 어긋나지 않는 이유입니다.
//! 발음 규칙 파이프라인과는 독립 — 여기서는 표기 조합만 다룹니다.

use crate::core::jamo::{classify, Jamo};
use crate::core::unicode::{
    choseong_jamo, combine_jongseong, combine_jungseong, compose, jongseong_to_choseong,
    split_jongseong,
};

/// 재생 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만
    Onset,
    /// 초성 + 중성
    OnsetVowel,
    /// 초성 + 중성 + 종성
    OnsetVowelCoda,
}

/// 버퍼 재생용 조합 기계
struct Composer {
    state: State,
    cho: u32,
    jung: u32,
    jong: u32,
    out: String,
}

impl Composer {
    fn new() -> Self {
        Self {
            state: State::Empty,
            cho: 0,
            jung: 0,
            jong: 0,
            out: String::new(),
        }
    }

    /// 자모 하나로 상태 전이. 자모가 아닌 문자는 현재 글자 확정 후 그대로 출력
    fn feed(&mut self, c: char) {
        match classify(c) {
            Some(Jamo::Consonant { cho, jong }) => self.feed_consonant(c, cho, jong),
            Some(Jamo::Vowel { jung }) => self.feed_vowel(c, jung),
            None => {
                self.flush();
                self.out.push(c);
            }
        }
    }

    fn feed_consonant(&mut self, c: char, cho: Option<u32>, jong: Option<u32>) {
        match self.state {
            State::Empty => self.start_onset(c, cho),
            State::Onset => {
                // 기존 초성을 낱자모로 확정하고 새 초성으로 교체
                self.flush();
                self.start_onset(c, cho);
            }
            State::OnsetVowel => {
                if let Some(jong) = jong {
                    self.jong = jong;
                    self.state = State::OnsetVowelCoda;
                } else {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.flush();
                    self.start_onset(c, cho);
                }
            }
            State::OnsetVowelCoda => {
                // 복합 종성 조합 시도
                if let Some(merged) = jong.and_then(|j| combine_jongseong(self.jong, j)) {
                    self.jong = merged;
                } else {
                    self.flush();
                    self.start_onset(c, cho);
                }
            }
        }
    }

    fn feed_vowel(&mut self, c: char, jung: u32) {
        match self.state {
            State::Empty => {
                // 초성 없는 모음은 낱자모 그대로
                self.out.push(c);
            }
            State::Onset => {
                self.jung = jung;
                self.state = State::OnsetVowel;
            }
            State::OnsetVowel => {
                // 복합 모음 조합 시도
                if let Some(merged) = combine_jungseong(self.jung, jung) {
                    self.jung = merged;
                } else {
                    self.flush();
                    self.out.push(c);
                }
            }
            State::OnsetVowelCoda => {
                // 연음: 복합 종성은 마지막 자음만, 단일 종성은 전체가 다음 초성으로
                let moved = if let Some((remain, moved)) = split_jongseong(self.jong) {
                    self.jong = remain;
                    Some(moved)
                } else if let Some(moved) = jongseong_to_choseong(self.jong) {
                    self.jong = 0;
                    Some(moved)
                } else {
                    None
                };
                self.flush();
                match moved {
                    Some(moved) => {
                        self.cho = moved;
                        self.jung = jung;
                        self.state = State::OnsetVowel;
                    }
                    None => self.out.push(c),
                }
            }
        }
    }

    /// 초성 자리로 새 자음 배치. 초성 불가 자모(ㄳ 등)는 낱자모 출력
    fn start_onset(&mut self, c: char, cho: Option<u32>) {
        match cho {
            Some(cho) => {
                self.cho = cho;
                self.state = State::Onset;
            }
            None => self.out.push(c),
        }
    }

    /// 조합 중인 부분 글자를 출력으로 확정하고 상태 초기화
    fn flush(&mut self) {
        match self.state {
            State::Empty => {}
            State::Onset => {
                if let Some(c) = choseong_jamo(self.cho) {
                    self.out.push(c);
                }
            }
            State::OnsetVowel => {
                if let Some(c) = compose(self.cho, self.jung, 0) {
                    self.out.push(c);
                }
            }
            State::OnsetVowelCoda => {
                if let Some(c) = compose(self.cho, self.jung, self.jong) {
                    self.out.push(c);
                }
            }
        }
        self.state = State::Empty;
        self.cho = 0;
        self.jung = 0;
        self.jong = 0;
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}

/// 자모 버퍼를 소유하는 조합기
///
/// add/backspace/clear가 유일한 변경 연산이며, 각각 버퍼 전체를 재생한
/// 최신 문자열을 돌려줍니다.
#[derive(Debug, Default)]
pub struct Assembler {
    buffer: Vec<char>,
}

impl Assembler {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// 자모 추가 후 전체 렌더링
    pub fn add(&mut self, jamo: char) -> String {
        self.buffer.push(jamo);
        self.render()
    }

    /// 마지막 자모 제거 후 전체 렌더링
    pub fn backspace(&mut self) -> String {
        self.buffer.pop();
        self.render()
    }

    /// 버퍼 비우기
    pub fn clear(&mut self) -> String {
        self.buffer.clear();
        String::new()
    }

    /// 버퍼 전체를 처음부터 재생
    fn render(&self) -> String {
        let mut composer = Composer::new();
        for &c in &self.buffer {
            composer.feed(c);
        }
        composer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(jamos: &str) -> String {
        let mut asm = Assembler::new();
        let mut last = String::new();
        for c in jamos.chars() {
            last = asm.add(c);
        }
        last
    }

    #[test]
    fn test_basic_composition() {
        let mut asm = Assembler::new();
        assert_eq!(asm.add('ㄱ'), "ㄱ");
        assert_eq!(asm.add('ㅏ'), "가");
        assert_eq!(asm.add('ㄴ'), "간");
    }

    #[test]
    fn test_backspace_steps_back() {
        let mut asm = Assembler::new();
        asm.add('ㄱ');
        asm.add('ㅏ');
        asm.add('ㄴ');
        assert_eq!(asm.backspace(), "가");
        assert_eq!(asm.backspace(), "ㄱ");
        assert_eq!(asm.backspace(), "");
        // 빈 버퍼에서의 백스페이스는 무해
        assert_eq!(asm.backspace(), "");
    }

    #[test]
    fn test_clear() {
        let mut asm = Assembler::new();
        asm.add('ㄱ');
        asm.add('ㅏ');
        assert_eq!(asm.clear(), "");
        assert_eq!(asm.add('ㄴ'), "ㄴ");
    }

    #[test]
    fn test_simple_coda_resyllabifies() {
        // 간 + ㅏ -> 가나
        assert_eq!(typed("ㄱㅏㄴㅏ"), "가나");
    }

    #[test]
    fn test_compound_coda_splits_on_vowel() {
        // 앍 + ㅏ -> 알가
        assert_eq!(typed("ㅇㅏㄹㄱㅏ"), "알가");
    }

    #[test]
    fn test_compound_coda_merge() {
        assert_eq!(typed("ㅇㅏㄹㄱ"), "앍");
        assert_eq!(typed("ㄱㅏㅂㅅ"), "값");
    }

    #[test]
    fn test_compound_coda_merge_failure_starts_new_onset() {
        // 간 + ㄱ: ㄴ+ㄱ 조합 불가 -> 간 확정, ㄱ 새 초성
        assert_eq!(typed("ㄱㅏㄴㄱ"), "간ㄱ");
        assert_eq!(typed("ㄱㅏㄴㄱㅏ"), "간가");
    }

    #[test]
    fn test_compound_vowel_merge() {
        assert_eq!(typed("ㅇㅗㅏ"), "와");
        assert_eq!(typed("ㄱㅜㅓ"), "궈");
        assert_eq!(typed("ㅇㅡㅣ"), "의");
    }

    #[test]
    fn test_compound_vowel_merge_failure_emits_literal() {
        // 가 + ㅗ: ㅏ+ㅗ 조합 불가 -> 가 확정, ㅗ 낱자모
        assert_eq!(typed("ㄱㅏㅗ"), "가ㅗ");
    }

    #[test]
    fn test_vowel_without_onset_is_literal() {
        assert_eq!(typed("ㅏ"), "ㅏ");
        assert_eq!(typed("ㅏㅗ"), "ㅏㅗ");
    }

    #[test]
    fn test_consonant_then_consonant_flushes_bare_glyph() {
        assert_eq!(typed("ㄱㄴ"), "ㄱㄴ");
        assert_eq!(typed("ㄱㄴㅏ"), "ㄱ나");
    }

    #[test]
    fn test_non_storable_coda_starts_new_syllable() {
        // ㄸ는 종성 불가 -> 가 확정, ㄸ 새 초성
        assert_eq!(typed("ㄱㅏㄸㅏ"), "가따");
    }

    #[test]
    fn test_coda_only_jamo_passthrough() {
        // ㄳ는 초성 자리에 올 수 없음
        assert_eq!(typed("ㄳ"), "ㄳ");
        // 중성 뒤에서는 종성으로 들어감
        assert_eq!(typed("ㅅㅏㄳ"), "삯");
    }

    #[test]
    fn test_other_char_passthrough() {
        let mut asm = Assembler::new();
        asm.add('ㄱ');
        asm.add('ㅏ');
        assert_eq!(asm.add('!'), "가!");
        assert_eq!(asm.add('ㄴ'), "가!ㄴ");
    }

    #[test]
    fn test_full_word() {
        // ㅎㅏㄴㄱㅡㄹ -> 한글 (ㄴ이 종성으로 들어갔다가 ㄱ 입력 시 조합 실패로
        // 분리되는 게 아니라, ㄴ+ㄱ 복합 불가라 한 확정 후 글 조합)
        assert_eq!(typed("ㅎㅏㄴㄱㅡㄹ"), "한글");
    }
}
