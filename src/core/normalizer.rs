//! 일본어 텍스트 정규화 (neologd 규칙)

use std::collections::HashMap;

use crate::core::conversion_table::{ConversionTable, Replacement};
use crate::core::normalizer_fsm::NormalizerFsm;

/// 기본 치환 테이블로 정규화
pub fn normalize(text: &str) -> String {
    run(text, ConversionTable::new())
}

/// 사용자 치환 테이블을 기본 테이블 위에 겹쳐 정규화
/// 키가 겹치면 사용자 테이블이 우선
pub fn normalize_with(text: &str, overrides: &HashMap<char, String>) -> String {
    run(text, ConversionTable::with_overrides(overrides))
}

fn run(text: &str, table: ConversionTable<'_>) -> String {
    let mut fsm = NormalizerFsm::with_capacity(text.len());

    for c in text.chars() {
        match table.convert(c) {
            Replacement::Char(r) => fsm.feed(r),
            Replacement::Opaque(s) => fsm.feed_opaque(s),
            Replacement::Deleted => {}
        }
    }

    let output = fsm.finish();
    let trimmed = output.trim();
    if trimmed.len() == output.len() {
        output
    } else {
        trimmed.to_string()
    }
}

/// 사용자 치환 테이블을 보관하는 정규화기
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    overrides: HashMap<char, String>,
}

impl Normalizer {
    /// 기본 테이블만 쓰는 정규화기
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 치환 테이블 지정
    pub fn with_overrides(overrides: HashMap<char, String>) -> Self {
        Self { overrides }
    }

    /// 치환 항목 하나 추가 (기존 항목은 덮어씀)
    pub fn insert(&mut self, from: char, to: impl Into<String>) {
        self.overrides.insert(from, to.into());
    }

    pub fn overrides(&self) -> &HashMap<char, String> {
        &self.overrides
    }

    pub fn normalize(&self, text: &str) -> String {
        if self.overrides.is_empty() {
            normalize(text)
        } else {
            normalize_with(text, &self.overrides)
        }
    }
}
