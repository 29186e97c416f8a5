//! 정규화 유한 상태 기계 (FSM)
//!
//! 치환 테이블을 거친 문자를 한 글자씩 받아 한 번의 순회로 출력을 만든다.
//! 다음 글자 하나만 미리 보면 되도록 보류 상태를 둔다.

use crate::core::kana::{
    combine, half_width_to_full, is_combinable, is_latin, voicing_mark, LONG_VOWEL_MARK,
};

/// 탁점 조합을 기다리는 가나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingKana {
    /// 반각에서 전각으로 바꾼 가나
    HalfWidth(char),
    /// 원래 전각인 조합 가능 가나
    FullWidth(char),
}

impl PendingKana {
    fn kana(self) -> char {
        match self {
            PendingKana::HalfWidth(c) | PendingKana::FullWidth(c) => c,
        }
    }
}

/// 정규화 FSM
pub struct NormalizerFsm {
    /// 보류 중인 가나 (반각/전각 중 하나만)
    pending: Option<PendingKana>,
    /// 마지막으로 출력한 문자가 장음 부호나 공백이면 그 문자
    squeezee: Option<char>,
    /// 마지막으로 출력한 문자가 라틴 문자인지
    prev_latin: bool,
    /// 보류 중인 공백 (값: 공백 앞 문자가 라틴인지)
    pending_space: Option<bool>,
    /// 출력 버퍼
    output: String,
}

impl NormalizerFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 출력 버퍼 크기를 지정해 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: None,
            squeezee: None,
            prev_latin: false,
            pending_space: None,
            output: String::with_capacity(capacity),
        }
    }

    /// 치환이 끝난 문자 하나를 입력
    pub fn feed(&mut self, c: char) {
        if let Some(pending) = self.pending {
            if c == ' ' {
                // 가나 뒤 공백은 어차피 제거되므로 탁점 대기를 유지
                self.pending_space.get_or_insert(false);
                return;
            }
            self.pending = None;
            if let Some(voiced) = voicing_mark(c).and_then(|mark| combine(pending.kana(), mark)) {
                log::trace!("탁점 조합: {:?} + {:?} -> {}", pending, c, voiced);
                self.emit(voiced);
                return;
            }
            self.emit(pending.kana());
        }

        if let Some(full) = half_width_to_full(c) {
            self.pending = Some(PendingKana::HalfWidth(full));
        } else if is_combinable(c) {
            self.pending = Some(PendingKana::FullWidth(c));
        } else {
            self.emit(c);
        }
    }

    /// 여러 글자 치환 결과를 그대로 출력
    /// 라틴이 아닌 한 덩어리로 취급하며 이후 규칙을 다시 적용하지 않음
    pub fn feed_opaque(&mut self, s: &str) {
        self.flush_pending();
        log::trace!("치환 결과 그대로 출력: {:?}", s);
        self.pending_space = None;
        self.output.push_str(s);
        self.squeezee = None;
        self.prev_latin = false;
    }

    /// 보류 중인 가나를 단독으로 출력
    fn flush_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.emit(pending.kana());
        }
    }

    /// 연속 압축과 공백 제거 규칙을 거쳐 출력
    fn emit(&mut self, c: char) {
        if c == ' ' {
            // 연속 공백은 보류 상태가 이어지며 하나로 합쳐짐
            self.pending_space.get_or_insert(self.prev_latin);
            return;
        }

        if c == LONG_VOWEL_MARK && self.squeezee == Some(c) {
            return;
        }

        let latin = is_latin(c);
        if let Some(after_latin) = self.pending_space.take() {
            if after_latin && latin {
                self.push(' ');
            }
        }
        self.push(c);
        self.prev_latin = latin;
    }

    fn push(&mut self, c: char) {
        self.output.push(c);
        self.squeezee = (c == ' ' || c == LONG_VOWEL_MARK).then_some(c);
    }

    /// FSM 종료 및 결과 반환 (앞뒤 공백은 정리하지 않음)
    pub fn finish(mut self) -> String {
        self.flush_pending();
        // 끝에 남은 공백은 버림
        self.pending_space = None;
        self.output
    }
}

impl Default for NormalizerFsm {
    fn default() -> Self {
        Self::new()
    }
}
