//! 한글 자모 분해와 피드백 판정

pub mod error;
pub mod feedback;
pub mod syllable;
pub mod target;
