//! 완성형 한글 음절 분해/조합
//!
//! 음절 하나를 초성/중성/종성 세 자모로 나눕니다.
//! 자모는 호환용 자모(U+3131~U+3163) 문자로 비교하므로
//! 초성 ㄱ과 종성 ㄱ은 같은 자모입니다.

use super::error::GuessError;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 오프셋 (힣 - 가)
const HANGUL_SYLLABLE_LAST_OFFSET: u32 = 11171;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 비교 단위가 되는 자모 기호 (호환용 자모 문자)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jamo(char);

impl Jamo {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Jamo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 초성 (19개, 유니코드 초성 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Lead {
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

impl Lead {
    /// 인덱스 -> 초성
    pub const ALL: [Lead; CHOSEONG_COUNT as usize] = [
        Lead::Giyeok,
        Lead::SsangGiyeok,
        Lead::Nieun,
        Lead::Digeut,
        Lead::SsangDigeut,
        Lead::Rieul,
        Lead::Mieum,
        Lead::Bieup,
        Lead::SsangBieup,
        Lead::Siot,
        Lead::SsangSiot,
        Lead::Ieung,
        Lead::Jieut,
        Lead::SsangJieut,
        Lead::Chieut,
        Lead::Kieuk,
        Lead::Tieut,
        Lead::Pieup,
        Lead::Hieut,
    ];

    pub fn from_index(index: u32) -> Option<Lead> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// 호환용 자모
    pub fn jamo(self) -> Jamo {
        let c = match self {
            Lead::Giyeok => '\u{3131}',      // ㄱ
            Lead::SsangGiyeok => '\u{3132}', // ㄲ
            Lead::Nieun => '\u{3134}',       // ㄴ
            Lead::Digeut => '\u{3137}',      // ㄷ
            Lead::SsangDigeut => '\u{3138}', // ㄸ
            Lead::Rieul => '\u{3139}',       // ㄹ
            Lead::Mieum => '\u{3141}',       // ㅁ
            Lead::Bieup => '\u{3142}',       // ㅂ
            Lead::SsangBieup => '\u{3143}',  // ㅃ
            Lead::Siot => '\u{3145}',        // ㅅ
            Lead::SsangSiot => '\u{3146}',   // ㅆ
            Lead::Ieung => '\u{3147}',       // ㅇ
            Lead::Jieut => '\u{3148}',       // ㅈ
            Lead::SsangJieut => '\u{3149}',  // ㅉ
            Lead::Chieut => '\u{314A}',      // ㅊ
            Lead::Kieuk => '\u{314B}',       // ㅋ
            Lead::Tieut => '\u{314C}',       // ㅌ
            Lead::Pieup => '\u{314D}',       // ㅍ
            Lead::Hieut => '\u{314E}',       // ㅎ
        };
        Jamo(c)
    }
}

/// 중성 (21개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

impl Vowel {
    /// 인덱스 -> 중성
    pub const ALL: [Vowel; JUNGSEONG_COUNT as usize] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    pub fn from_index(index: u32) -> Option<Vowel> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163), 중성 순서와 동일
    pub fn jamo(self) -> Jamo {
        // 0x314F + 0..=20 은 항상 유효한 코드포인트
        Jamo(char::from_u32(0x314F + self.index()).unwrap_or('\u{314F}'))
    }
}

/// 종성 (28개, 0 = 종성 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tail {
    None,
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

impl Tail {
    /// 인덱스 -> 종성
    pub const ALL: [Tail; JONGSEONG_COUNT as usize] = [
        Tail::None,
        Tail::Giyeok,
        Tail::SsangGiyeok,
        Tail::GiyeokSiot,
        Tail::Nieun,
        Tail::NieunJieut,
        Tail::NieunHieut,
        Tail::Digeut,
        Tail::Rieul,
        Tail::RieulGiyeok,
        Tail::RieulMieum,
        Tail::RieulBieup,
        Tail::RieulSiot,
        Tail::RieulTieut,
        Tail::RieulPieup,
        Tail::RieulHieut,
        Tail::Mieum,
        Tail::Bieup,
        Tail::BieupSiot,
        Tail::Siot,
        Tail::SsangSiot,
        Tail::Ieung,
        Tail::Jieut,
        Tail::Chieut,
        Tail::Kieuk,
        Tail::Tieut,
        Tail::Pieup,
        Tail::Hieut,
    ];

    pub fn from_index(index: u32) -> Option<Tail> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// 호환용 자모 (종성 없음이면 None)
    pub fn jamo(self) -> Option<Jamo> {
        let c = match self {
            Tail::None => return None,
            Tail::Giyeok => '\u{3131}',      // ㄱ
            Tail::SsangGiyeok => '\u{3132}', // ㄲ
            Tail::GiyeokSiot => '\u{3133}',  // ㄳ
            Tail::Nieun => '\u{3134}',       // ㄴ
            Tail::NieunJieut => '\u{3135}',  // ㄵ
            Tail::NieunHieut => '\u{3136}',  // ㄶ
            Tail::Digeut => '\u{3137}',      // ㄷ
            Tail::Rieul => '\u{3139}',       // ㄹ
            Tail::RieulGiyeok => '\u{313A}', // ㄺ
            Tail::RieulMieum => '\u{313B}',  // ㄻ
            Tail::RieulBieup => '\u{313C}',  // ㄼ
            Tail::RieulSiot => '\u{313D}',   // ㄽ
            Tail::RieulTieut => '\u{313E}',  // ㄾ
            Tail::RieulPieup => '\u{313F}',  // ㄿ
            Tail::RieulHieut => '\u{3140}',  // ㅀ
            Tail::Mieum => '\u{3141}',       // ㅁ
            Tail::Bieup => '\u{3142}',       // ㅂ
            Tail::BieupSiot => '\u{3144}',   // ㅄ
            Tail::Siot => '\u{3145}',        // ㅅ
            Tail::SsangSiot => '\u{3146}',   // ㅆ
            Tail::Ieung => '\u{3147}',       // ㅇ
            Tail::Jieut => '\u{3148}',       // ㅈ
            Tail::Chieut => '\u{314A}',      // ㅊ
            Tail::Kieuk => '\u{314B}',       // ㅋ
            Tail::Tieut => '\u{314C}',       // ㅌ
            Tail::Pieup => '\u{314D}',       // ㅍ
            Tail::Hieut => '\u{314E}',       // ㅎ
        };
        Some(Jamo(c))
    }
}

/// 분해된 음절 (초성, 중성, 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    pub lead: Lead,
    pub vowel: Vowel,
    pub tail: Tail,
}

impl Syllable {
    /// 비교용 자모 세 개 [초성, 중성, 종성]
    ///
    /// 종성 없음은 `None`이며, `None`끼리는 서로 일치한다.
    pub fn components(&self) -> [Option<Jamo>; 3] {
        [Some(self.lead.jamo()), Some(self.vowel.jamo()), self.tail.jamo()]
    }

    /// 자모 하나가 이 음절의 세 자리 중 어디에든 있는지
    pub fn contains(&self, jamo: Option<Jamo>) -> bool {
        self.components().contains(&jamo)
    }
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    let code = c as u32;
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + HANGUL_SYLLABLE_LAST_OFFSET).contains(&code)
}

/// 완성형 한글을 초성/중성/종성으로 분해
///
/// 가-힣 범위 밖의 문자는 `GuessError::InvalidInput` (position 0).
/// 단어 안의 위치는 호출하는 쪽에서 채운다.
pub fn decompose(c: char) -> Result<Syllable, GuessError> {
    if !is_hangul_syllable(c) {
        return Err(GuessError::InvalidInput { ch: c, position: 0 });
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let invalid = || GuessError::InvalidInput { ch: c, position: 0 };

    let lead = Lead::from_index(offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT)).ok_or_else(invalid)?;
    let vowel = Vowel::from_index((offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT)
        .ok_or_else(invalid)?;
    let tail = Tail::from_index(offset % JONGSEONG_COUNT).ok_or_else(invalid)?;

    Ok(Syllable { lead, vowel, tail })
}

/// 단어 전체 분해. 에러에는 문제 글자의 위치가 들어간다.
pub fn decompose_word(chars: &[char]) -> Result<Vec<Syllable>, GuessError> {
    chars
        .iter()
        .enumerate()
        .map(|(position, &ch)| {
            decompose(ch).map_err(|_| GuessError::InvalidInput { ch, position })
        })
        .collect()
}

/// 초성/중성/종성으로 완성된 한글 음절 생성
pub fn compose(syllable: &Syllable) -> char {
    let code = HANGUL_SYLLABLE_BASE
        + (syllable.lead.index() * JUNGSEONG_COUNT + syllable.vowel.index()) * JONGSEONG_COUNT
        + syllable.tail.index();
    // 세 인덱스 모두 범위 안이므로 가-힣 사이의 코드포인트
    char::from_u32(code).unwrap_or('\u{AC00}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jamo(c: char) -> Option<Jamo> {
        Some(Jamo(c))
    }

    #[test]
    fn test_decompose() {
        let han = decompose('한').unwrap();
        assert_eq!(han.lead, Lead::Hieut);
        assert_eq!(han.vowel, Vowel::A);
        assert_eq!(han.tail, Tail::Nieun);

        let yak = decompose('약').unwrap();
        assert_eq!(yak.components(), [jamo('ㅇ'), jamo('ㅑ'), jamo('ㄱ')]);

        let ga = decompose('가').unwrap();
        assert_eq!(ga.components(), [jamo('ㄱ'), jamo('ㅏ'), None]);

        let hih = decompose('힣').unwrap();
        assert_eq!(hih.components(), [jamo('ㅎ'), jamo('ㅣ'), jamo('ㅎ')]);
    }

    #[test]
    fn test_decompose_indices() {
        // 글 = ㄱ(0) + ㅡ(18) + ㄹ(8)
        let geul = decompose('글').unwrap();
        assert_eq!(
            (geul.lead.index(), geul.vowel.index(), geul.tail.index()),
            (0, 18, 8)
        );
    }

    #[test]
    fn test_decompose_invalid() {
        assert_eq!(
            decompose('a'),
            Err(GuessError::InvalidInput { ch: 'a', position: 0 })
        );
        assert!(decompose('ㄱ').is_err()); // 낱자모
        assert!(decompose('\u{ABFF}').is_err());
        assert!(decompose('\u{D7A4}').is_err());
    }

    #[test]
    fn test_decompose_word_reports_position() {
        assert_eq!(
            decompose_word(&['한', 'x']),
            Err(GuessError::InvalidInput { ch: 'x', position: 1 })
        );
        assert_eq!(decompose_word(&['한', '약']).unwrap().len(), 2);
    }

    #[test]
    fn test_compose_roundtrip_whole_block() {
        for code in 0xAC00u32..=0xD7A3 {
            let c = char::from_u32(code).unwrap();
            let syllable = decompose(c).unwrap();
            assert_eq!(compose(&syllable), c);
            assert_eq!(decompose(c).unwrap(), syllable);
        }
    }

    #[test]
    fn test_lead_and_tail_share_jamo() {
        assert_eq!(Lead::Giyeok.jamo(), Tail::Giyeok.jamo().unwrap());
        assert_eq!(Lead::Hieut.jamo(), Tail::Hieut.jamo().unwrap());
        assert_eq!(Tail::None.jamo(), None);
    }

    #[test]
    fn test_jamo_tables() {
        assert_eq!(Lead::ALL.len(), 19);
        assert_eq!(Vowel::ALL.len(), 21);
        assert_eq!(Tail::ALL.len(), 28);

        for (i, lead) in Lead::ALL.iter().enumerate() {
            assert_eq!(lead.index() as usize, i);
        }
        for (i, tail) in Tail::ALL.iter().enumerate() {
            assert_eq!(tail.index() as usize, i);
        }
        assert_eq!(Vowel::A.jamo().as_char(), 'ㅏ');
        assert_eq!(Vowel::Ui.jamo().as_char(), 'ㅢ');
        assert_eq!(Vowel::I.jamo().as_char(), 'ㅣ');
        assert_eq!(Lead::SsangJieut.jamo().as_char(), 'ㅉ');
        assert_eq!(Tail::BieupSiot.jamo().map(Jamo::as_char), Some('ㅄ'));
        assert_eq!(Lead::from_index(19), None);
        assert_eq!(Tail::from_index(28), None);
    }

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('ㅏ'));
        assert!(!is_hangul_syllable('A'));
    }
}
