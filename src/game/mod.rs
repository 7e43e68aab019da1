//! 게임 세션 상태 관리

mod session;

pub use session::{GuessRecord, Session, SessionState, SubmitOutcome};
