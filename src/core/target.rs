//! 정답 단어

use super::error::GuessError;
use super::syllable::decompose_word;

/// 정답 글자 수
pub const TARGET_LEN: usize = 2;

/// 기본 정답
pub const DEFAULT_TARGET: &str = "한약";

/// 세션 동안 바뀌지 않는 두 글자 정답
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    chars: [char; TARGET_LEN],
}

impl Target {
    /// 두 글자 완성형 한글만 허용
    pub fn new(word: &str) -> Result<Self, GuessError> {
        let chars: Vec<char> = word.trim().chars().collect();
        let chars: [char; TARGET_LEN] =
            chars
                .as_slice()
                .try_into()
                .map_err(|_| GuessError::Length {
                    expected: TARGET_LEN,
                    actual: chars.len(),
                })?;
        decompose_word(&chars)?;
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        TARGET_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            chars: ['한', '약'],
        }
    }
}
