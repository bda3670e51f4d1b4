//! 한글 음절 코덱과 자모 분류

pub mod jamo;
pub mod unicode;
