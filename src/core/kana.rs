//! 문자 분류: 라틴 문자, 반각 가나, 탁점/반탁점 조합

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 장음 부호
pub const LONG_VOWEL_MARK: char = 'ー';

#[rustfmt::skip]
const HALF_WIDTH_KANA: &[(char, char)] = &[
    ('ｱ', 'ア'), ('ｲ', 'イ'), ('ｳ', 'ウ'), ('ｴ', 'エ'), ('ｵ', 'オ'),
    ('ｶ', 'カ'), ('ｷ', 'キ'), ('ｸ', 'ク'), ('ｹ', 'ケ'), ('ｺ', 'コ'),
    ('ｻ', 'サ'), ('ｼ', 'シ'), ('ｽ', 'ス'), ('ｾ', 'セ'), ('ｿ', 'ソ'),
    ('ﾀ', 'タ'), ('ﾁ', 'チ'), ('ﾂ', 'ツ'), ('ﾃ', 'テ'), ('ﾄ', 'ト'),
    ('ﾅ', 'ナ'), ('ﾆ', 'ニ'), ('ﾇ', 'ヌ'), ('ﾈ', 'ネ'), ('ﾉ', 'ノ'),
    ('ﾊ', 'ハ'), ('ﾋ', 'ヒ'), ('ﾌ', 'フ'), ('ﾍ', 'ヘ'), ('ﾎ', 'ホ'),
    ('ﾏ', 'マ'), ('ﾐ', 'ミ'), ('ﾑ', 'ム'), ('ﾒ', 'メ'), ('ﾓ', 'モ'),
    ('ﾔ', 'ヤ'), ('ﾕ', 'ユ'), ('ﾖ', 'ヨ'),
    ('ﾗ', 'ラ'), ('ﾘ', 'リ'), ('ﾙ', 'ル'), ('ﾚ', 'レ'), ('ﾛ', 'ロ'),
    ('ﾜ', 'ワ'), ('ｦ', 'ヲ'), ('ﾝ', 'ン'),
    ('ｧ', 'ァ'), ('ｨ', 'ィ'), ('ｩ', 'ゥ'), ('ｪ', 'ェ'), ('ｫ', 'ォ'),
    ('ｯ', 'ッ'), ('ｬ', 'ャ'), ('ｭ', 'ュ'), ('ｮ', 'ョ'),
];

#[rustfmt::skip]
const DAKUON: &[(char, char)] = &[
    // 가타카나
    ('ウ', 'ヴ'),
    ('カ', 'ガ'), ('キ', 'ギ'), ('ク', 'グ'), ('ケ', 'ゲ'), ('コ', 'ゴ'),
    ('サ', 'ザ'), ('シ', 'ジ'), ('ス', 'ズ'), ('セ', 'ゼ'), ('ソ', 'ゾ'),
    ('タ', 'ダ'), ('チ', 'ヂ'), ('ツ', 'ヅ'), ('テ', 'デ'), ('ト', 'ド'),
    ('ハ', 'バ'), ('ヒ', 'ビ'), ('フ', 'ブ'), ('ヘ', 'ベ'), ('ホ', 'ボ'),
    // 히라가나
    ('う', 'ゔ'),
    ('か', 'が'), ('き', 'ぎ'), ('く', 'ぐ'), ('け', 'げ'), ('こ', 'ご'),
    ('さ', 'ざ'), ('し', 'じ'), ('す', 'ず'), ('せ', 'ぜ'), ('そ', 'ぞ'),
    ('た', 'だ'), ('ち', 'ぢ'), ('つ', 'づ'), ('て', 'で'), ('と', 'ど'),
    ('は', 'ば'), ('ひ', 'び'), ('ふ', 'ぶ'), ('へ', 'べ'), ('ほ', 'ぼ'),
];

#[rustfmt::skip]
const HANDAKUON: &[(char, char)] = &[
    ('ハ', 'パ'), ('ヒ', 'ピ'), ('フ', 'プ'), ('ヘ', 'ペ'), ('ホ', 'ポ'),
    ('は', 'ぱ'), ('ひ', 'ぴ'), ('ふ', 'ぷ'), ('へ', 'ぺ'), ('ほ', 'ぽ'),
];

lazy_static! {
    static ref HALF_WIDTH_KANA_MAP: HashMap<char, char> = HALF_WIDTH_KANA.iter().copied().collect();
    static ref DAKUON_MAP: HashMap<char, char> = DAKUON.iter().copied().collect();
    static ref HANDAKUON_MAP: HashMap<char, char> = HANDAKUON.iter().copied().collect();
}

/// 탁점 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicingMark {
    /// 탁점 (゛)
    Dakuten,
    /// 반탁점 (゜)
    Handakuten,
}

/// 탁점/반탁점 부호 판별
/// 전각 단독형, 결합형, 반각형 세 가지를 모두 인식
pub fn voicing_mark(c: char) -> Option<VoicingMark> {
    match c {
        '\u{309B}' | '\u{3099}' | '\u{FF9E}' => Some(VoicingMark::Dakuten),
        '\u{309C}' | '\u{309A}' | '\u{FF9F}' => Some(VoicingMark::Handakuten),
        _ => None,
    }
}

/// 공백 제거 판정에 쓰는 라틴 문자 (ASCII 영문/숫자)
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// 반각 가나를 전각으로 변환
pub fn half_width_to_full(c: char) -> Option<char> {
    HALF_WIDTH_KANA_MAP.get(&c).copied()
}

/// 뒤따르는 탁점/반탁점과 조합 가능한 가나인지 확인
pub fn is_combinable(c: char) -> bool {
    DAKUON_MAP.contains_key(&c) || HANDAKUON_MAP.contains_key(&c)
}

/// 가나 + 탁점/반탁점 조합
/// 반환: 조합된 가나 (조합 불가 시 None)
pub fn combine(base: char, mark: VoicingMark) -> Option<char> {
    let map = match mark {
        VoicingMark::Dakuten => &*DAKUON_MAP,
        VoicingMark::Handakuten => &*HANDAKUON_MAP,
    };
    map.get(&base).copied()
}
