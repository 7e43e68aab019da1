//! 한 판의 게임 세션
//!
//! 추측을 받아 검증하고, 피드백을 히스토리에 쌓고, 정답 여부에 따라 상태를 바꿉니다.
//! 화면 출력은 콜백으로 주입받습니다.

use serde::Serialize;

use crate::core::error::GuessError;
use crate::core::feedback::{classify, FeedbackEntry};
use crate::core::target::Target;

/// 세션 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// 입력 대기
    AwaitingInput,
    /// 판정 중 (submit 안에서만 잠깐 머무름)
    Evaluating,
    /// 정답을 맞힘
    Solved,
}

/// 히스토리 한 줄
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Vec<FeedbackEntry>,
}

/// 제출 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Vec<FeedbackEntry>,
    pub solved: bool,
}

type RenderCallback = Box<dyn FnMut(&GuessRecord)>;
type SolvedCallback = Box<dyn FnMut(usize)>;

/// 게임 세션
pub struct Session {
    target: Target,
    state: SessionState,
    history: Vec<GuessRecord>,
    /// 히스토리 한 줄이 추가될 때 호출
    on_render: Option<RenderCallback>,
    /// 정답을 맞혔을 때 호출 (시도 횟수 전달)
    on_solved: Option<SolvedCallback>,
}

impl Session {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            state: SessionState::AwaitingInput,
            history: Vec::new(),
            on_render: None,
            on_solved: None,
        }
    }

    /// 히스토리 출력 콜백 설정
    pub fn set_render_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&GuessRecord) + 'static,
    {
        self.on_render = Some(Box::new(callback));
    }

    /// 정답 배너 콜백 설정
    pub fn set_solved_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.on_solved = Some(Box::new(callback));
    }

    /// 추측 제출
    ///
    /// 입력은 앞뒤 공백을 제거한 뒤 글자 수를 검사한다.
    /// 에러가 나면 히스토리와 상태는 그대로 남는다.
    pub fn submit(&mut self, input: &str) -> Result<SubmitOutcome, GuessError> {
        let guess: Vec<char> = input.trim().chars().collect();

        if guess.len() != self.target.len() {
            log::warn!("글자 수 불일치로 거부: {:?}", input.trim());
            return Err(GuessError::Length {
                expected: self.target.len(),
                actual: guess.len(),
            });
        }

        let previous = self.state;
        self.state = SessionState::Evaluating;

        let feedback = match classify(&guess, self.target.chars()) {
            Ok(feedback) => feedback,
            Err(e) => {
                log::warn!("판정 실패: {}", e);
                self.state = previous;
                return Err(e);
            }
        };

        let solved = guess.as_slice() == self.target.chars();
        let record = GuessRecord {
            guess: guess.iter().collect(),
            feedback: feedback.clone(),
        };

        if let Some(callback) = self.on_render.as_mut() {
            callback(&record);
        }
        self.history.push(record);

        if solved || previous == SessionState::Solved {
            self.state = SessionState::Solved;
        } else {
            self.state = SessionState::AwaitingInput;
        }

        if solved && previous != SessionState::Solved {
            log::info!("정답! {}번 시도", self.history.len());
            let attempts = self.history.len();
            if let Some(callback) = self.on_solved.as_mut() {
                callback(attempts);
            }
        }

        Ok(SubmitOutcome { feedback, solved })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// 지금까지 기록된 시도 횟수
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}
