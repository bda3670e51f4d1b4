//! 한국어 발음 규칙 엔진
//!
//! 표기된 한글을 음절 셀로 분해하고, 고정 순서의 여섯 발음 규칙 패스
//! (연음, 격음화, 구개음화, 동화, 경음화, 대표음 정리)를 적용한 뒤
//! 발음 표기와 규칙 적용 기록을 돌려줍니다.
//!
//! # 사용 예시
//!
//! ```
//! use baleum::phonology::phonemize;
//!
//! let result = phonemize("국물");
//! assert_eq!(result.pronounced, "궁물");
//! assert_eq!(result.trace[0].rule, "Nasalization");
//! ```
//!
//! 규칙으로 도출되지 않는 관용 발음은 예외 표가 먼저 가로챕니다:
//!
//! ```
//! use baleum::phonology::phonemize;
//! assert_eq!(phonemize("맛있다").pronounced, "마시따");
//! ```

pub mod cell;
pub mod exceptions;
pub mod phonemizer;
pub mod rules;

// 공개 인터페이스
pub use cell::{Cell, Rep};
pub use phonemizer::{phonemize, phonemize_with, Phonemized, PhonemizeOptions, TraceEntry};
