//! 추측 처리 에러

/// 추측 검증/분해 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// 글자 수가 정답과 다름 (상태 변화 없음)
    Length { expected: usize, actual: usize },
    /// 완성형 한글(가-힣) 범위 밖의 문자
    InvalidInput { ch: char, position: usize },
}

impl std::fmt::Display for GuessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessError::Length { expected, actual } => {
                write!(f, "{}글자만 입력해 주세요. (입력: {}글자)", expected, actual)
            }
            GuessError::InvalidInput { ch, position } => write!(
                f,
                "{}번째 글자 '{}'는 완성형 한글이 아닙니다",
                position + 1,
                ch
            ),
        }
    }
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GuessError::Length {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "2글자만 입력해 주세요. (입력: 3글자)");

        let err = GuessError::InvalidInput {
            ch: 'a',
            position: 1,
        };
        assert!(err.to_string().starts_with("2번째 글자 'a'"));
    }
}
