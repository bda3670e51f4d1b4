//! baleum - 한국어 발음 규칙 엔진 CLI
//!
//! 사용법:
//!   baleum <텍스트>       발음과 규칙 기록 출력
//!   baleum --json <텍스트> JSON으로 출력
//!   baleum --samples      내장 예제 사전 전체 변환

use baleum::dict;
use baleum::phonology::{phonemize_with, PhonemizeOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut json = false;
    let mut samples = false;
    let mut text = None;
    for arg in &args {
        match arg.as_str() {
            "--json" => json = true,
            "--samples" => samples = true,
            other => text = Some(other.to_string()),
        }
    }

    if samples {
        for entry in dict::ENTRIES {
            let options = PhonemizeOptions {
                is_verb: entry.is_verb,
            };
            let result = phonemize_with(entry.word, &options);
            println!(
                "{} [{}] — {} ({})",
                result.original, result.pronounced, entry.translation, entry.category
            );
        }
        return ExitCode::SUCCESS;
    }

    let Some(text) = text else {
        eprintln!("사용법: baleum [--json] <텍스트> | baleum --samples");
        return ExitCode::FAILURE;
    };

    let options = dict::find(&text)
        .map(|e| PhonemizeOptions { is_verb: e.is_verb })
        .unwrap_or_default();
    let result = phonemize_with(&text, &options);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                log::error!("JSON 직렬화 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{} [{}]", result.original, result.pronounced);
        for t in &result.trace {
            println!("  {}. {} — {}", t.index, t.rule, t.description);
        }
    }

    ExitCode::SUCCESS
}
