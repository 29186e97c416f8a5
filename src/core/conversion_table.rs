//! neologd 규칙의 문자 치환 테이블

use lazy_static::lazy_static;
use std::collections::HashMap;

#[rustfmt::skip]
const DEFAULT_ENTRIES: &[(char, &str)] = &[
    // 전각 숫자/영문 -> 반각
    ('０', "0"), ('１', "1"), ('２', "2"), ('３', "3"), ('４', "4"),
    ('５', "5"), ('６', "6"), ('７', "7"), ('８', "8"), ('９', "9"),
    ('Ａ', "A"), ('Ｂ', "B"), ('Ｃ', "C"), ('Ｄ', "D"), ('Ｅ', "E"), ('Ｆ', "F"), ('Ｇ', "G"),
    ('Ｈ', "H"), ('Ｉ', "I"), ('Ｊ', "J"), ('Ｋ', "K"), ('Ｌ', "L"), ('Ｍ', "M"), ('Ｎ', "N"),
    ('Ｏ', "O"), ('Ｐ', "P"), ('Ｑ', "Q"), ('Ｒ', "R"), ('Ｓ', "S"), ('Ｔ', "T"), ('Ｕ', "U"),
    ('Ｖ', "V"), ('Ｗ', "W"), ('Ｘ', "X"), ('Ｙ', "Y"), ('Ｚ', "Z"),
    ('ａ', "a"), ('ｂ', "b"), ('ｃ', "c"), ('ｄ', "d"), ('ｅ', "e"), ('ｆ', "f"), ('ｇ', "g"),
    ('ｈ', "h"), ('ｉ', "i"), ('ｊ', "j"), ('ｋ', "k"), ('ｌ', "l"), ('ｍ', "m"), ('ｎ', "n"),
    ('ｏ', "o"), ('ｐ', "p"), ('ｑ', "q"), ('ｒ', "r"), ('ｓ', "s"), ('ｔ', "t"), ('ｕ', "u"),
    ('ｖ', "v"), ('ｗ', "w"), ('ｘ', "x"), ('ｙ', "y"), ('ｚ', "z"),
    // 하이픈/마이너스 계열 -> '-'
    ('˗', "-"), ('֊', "-"), ('‐', "-"), ('‑', "-"), ('‒', "-"),
    ('–', "-"), ('⁃', "-"), ('⁻', "-"), ('₋', "-"), ('−', "-"),
    // 장음 부호 계열 -> 'ー'
    ('﹣', "ー"), ('－', "ー"), ('ｰ', "ー"), ('—', "ー"), ('―', "ー"), ('─', "ー"), ('━', "ー"),
    // 물결표 계열은 삭제
    ('~', ""), ('∼', ""), ('∾', ""), ('〜', ""), ('〰', ""), ('～', ""),
    // 전각 기호/공백 -> 반각
    ('　', " "), ('！', "!"), ('”', "\""), ('＃', "#"), ('＄', "$"), ('％', "%"), ('＆', "&"),
    ('’', "'"), ('（', "("), ('）', ")"), ('＊', "*"), ('＋', "+"), ('，', ","), ('．', "."),
    ('／', "/"), ('：', ":"), ('；', ";"), ('＜', "<"), ('＞', ">"), ('？', "?"), ('＠', "@"),
    ('［', "["), ('￥', "¥"), ('］', "]"), ('＾', "^"), ('＿', "_"), ('｀', "`"), ('｛', "{"),
    ('｜', "|"), ('｝', "}"),
    // 반각 기호 -> 전각
    ('｡', "。"), ('､', "、"), ('･', "・"), ('｢', "「"), ('｣', "」"),
];

lazy_static! {
    /// 기본 치환 테이블 (프로세스 전역, 변경 불가)
    pub static ref CONVERSION_MAP: HashMap<char, &'static str> =
        DEFAULT_ENTRIES.iter().copied().collect();
}

/// 치환 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement<'a> {
    /// 한 글자 (이후 규칙 적용 대상)
    Char(char),
    /// 삭제됨
    Deleted,
    /// 여러 글자 (그대로 출력)
    Opaque(&'a str),
}

impl<'a> Replacement<'a> {
    fn parse(s: &'a str) -> Self {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Replacement::Deleted,
            (Some(c), None) => Replacement::Char(c),
            _ => Replacement::Opaque(s),
        }
    }
}

/// 사용자 테이블 -> 기본 테이블 순으로 조회하는 계층형 테이블
///
/// 병합된 사본을 만들지 않으므로 호출마다 할당이 없다.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionTable<'a> {
    overrides: Option<&'a HashMap<char, String>>,
}

impl<'a> ConversionTable<'a> {
    /// 기본 테이블만 사용
    pub fn new() -> Self {
        Self { overrides: None }
    }

    /// 사용자 테이블을 기본 테이블 위에 겹침
    pub fn with_overrides(overrides: &'a HashMap<char, String>) -> Self {
        Self {
            overrides: Some(overrides),
        }
    }

    /// 문자 하나를 치환 (매핑이 없으면 그대로)
    pub fn convert(&self, c: char) -> Replacement<'a> {
        if let Some(s) = self.overrides.and_then(|m| m.get(&c)) {
            return Replacement::parse(s.as_str());
        }
        match CONVERSION_MAP.get(&c) {
            Some(s) => Replacement::parse(*s),
            None => Replacement::Char(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_folding() {
        let table = ConversionTable::new();
        assert_eq!(table.convert('０'), Replacement::Char('0'));
        assert_eq!(table.convert('Ｚ'), Replacement::Char('Z'));
        assert_eq!(table.convert('ｚ'), Replacement::Char('z'));
        assert_eq!(table.convert('　'), Replacement::Char(' '));
        assert_eq!(table.convert('｢'), Replacement::Char('「'));
    }

    #[test]
    fn test_hyphen_and_long_vowel() {
        let table = ConversionTable::new();
        assert_eq!(table.convert('₋'), Replacement::Char('-'));
        assert_eq!(table.convert('━'), Replacement::Char('ー'));
        assert_eq!(table.convert('ｰ'), Replacement::Char('ー'));
    }

    #[test]
    fn test_tilde_deleted() {
        let table = ConversionTable::new();
        for c in ['~', '∼', '∾', '〜', '〰', '～'] {
            assert_eq!(table.convert(c), Replacement::Deleted);
        }
    }

    #[test]
    fn test_passthrough() {
        let table = ConversionTable::new();
        assert_eq!(table.convert('あ'), Replacement::Char('あ'));
        assert_eq!(table.convert('＝'), Replacement::Char('＝'));
        assert_eq!(table.convert('ﾞ'), Replacement::Char('ﾞ'));
    }

    #[test]
    fn test_overrides_take_priority() {
        let mut overrides = HashMap::new();
        overrides.insert('０', "零".to_string());
        overrides.insert('あ', "亜細亜".to_string());
        overrides.insert('Ａ', String::new());

        let table = ConversionTable::with_overrides(&overrides);
        assert_eq!(table.convert('０'), Replacement::Char('零'));
        assert_eq!(table.convert('あ'), Replacement::Opaque("亜細亜"));
        assert_eq!(table.convert('Ａ'), Replacement::Deleted);
        // 목록에 없는 키는 기본 테이블
        assert_eq!(table.convert('１'), Replacement::Char('1'));
    }
}
