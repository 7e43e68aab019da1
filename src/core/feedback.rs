//! 추측 단어 피드백 분류
//!
//! 글자마다 자모를 분해해 같은 위치의 정답 글자와 비교하고
//! 여섯 가지 상태 중 하나로 분류합니다.

use serde::{Deserialize, Serialize};

use super::error::GuessError;
use super::syllable::{decompose_word, Syllable};

/// 글자 하나의 일치 상태 (판정 우선순위 순서)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    /// 글자 완전 일치 (녹용)
    Exact,
    /// 초성 일치 + 자모 2개 이상 일치 (버섯)
    StrongPartial,
    /// 초성 불일치 + 자모 2개 이상 일치 (마늘)
    ConsonantMismatchPartial,
    /// 자모 하나만 일치 (가지)
    SingleMatch,
    /// 다른 위치 글자의 자모와 일치 (바나나)
    ElsewhereMatch,
    /// 일치하지 않음 (사과)
    NoMatch,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 6] = [
        MatchStatus::Exact,
        MatchStatus::StrongPartial,
        MatchStatus::ConsonantMismatchPartial,
        MatchStatus::SingleMatch,
        MatchStatus::ElsewhereMatch,
        MatchStatus::NoMatch,
    ];

    /// 게임에서 쓰는 이름
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Exact => "녹용",
            MatchStatus::StrongPartial => "버섯",
            MatchStatus::ConsonantMismatchPartial => "마늘",
            MatchStatus::SingleMatch => "가지",
            MatchStatus::ElsewhereMatch => "바나나",
            MatchStatus::NoMatch => "사과",
        }
    }

    pub fn from_label(label: &str) -> Option<MatchStatus> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

/// 추측 글자 하나에 대한 피드백
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub ch: char,
    pub status: MatchStatus,
}

/// 추측 단어를 정답과 비교하여 글자별 피드백 생성
///
/// - 길이가 다르면 `GuessError::Length`
/// - 가-힣 범위 밖의 글자가 있으면 `GuessError::InvalidInput`
///
/// # Examples
/// ```
/// use jamodle::core::feedback::{classify, MatchStatus};
///
/// let feedback = classify(&['한', '약'], &['한', '약']).unwrap();
/// assert!(feedback.iter().all(|f| f.status == MatchStatus::Exact));
/// ```
pub fn classify(guess: &[char], target: &[char]) -> Result<Vec<FeedbackEntry>, GuessError> {
    if guess.len() != target.len() {
        return Err(GuessError::Length {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let guessed = decompose_word(guess)?;
    let answer = decompose_word(target)?;

    let feedback: Vec<FeedbackEntry> = guess
        .iter()
        .zip(target)
        .zip(guessed.iter().zip(&answer))
        .map(|((&ch, &expected), (g, a))| FeedbackEntry {
            ch,
            status: classify_syllable(ch == expected, g, a, &answer),
        })
        .collect();

    log::debug!(
        "피드백: {}",
        feedback
            .iter()
            .map(|f| format!("{}={}", f.ch, f.status.label()))
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(feedback)
}

/// 문자열 버전 (글자 단위로 나눠 `classify` 호출)
pub fn classify_str(guess: &str, target: &str) -> Result<Vec<FeedbackEntry>, GuessError> {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();
    classify(&guess, &target)
}

/// 한 위치의 상태 판정. 규칙은 위에서부터 먼저 맞는 것이 이긴다.
fn classify_syllable(
    exact: bool,
    guessed: &Syllable,
    answer: &Syllable,
    whole_answer: &[Syllable],
) -> MatchStatus {
    if exact {
        return MatchStatus::Exact;
    }

    // 추측 자모 각각을 독립적으로 검사 (중복 제거 없음)
    let components = guessed.components();
    let match_count = components.iter().filter(|&&j| answer.contains(j)).count();
    let lead_matches = guessed.lead.jamo() == answer.lead.jamo();

    if lead_matches && match_count >= 2 {
        return MatchStatus::StrongPartial;
    }
    if !lead_matches && match_count >= 2 {
        return MatchStatus::ConsonantMismatchPartial;
    }
    if match_count == 1 {
        return MatchStatus::SingleMatch;
    }

    // 같은 위치를 포함한 정답 전체
    if whole_answer
        .iter()
        .any(|a| components.iter().any(|&j| a.contains(j)))
    {
        return MatchStatus::ElsewhereMatch;
    }

    MatchStatus::NoMatch
}
