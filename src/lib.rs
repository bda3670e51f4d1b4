pub mod assembler;
pub mod core;
pub mod dict;
pub mod phonology;

pub use assembler::Assembler;
pub use phonology::{phonemize, phonemize_with, Phonemized, PhonemizeOptions, TraceEntry};
