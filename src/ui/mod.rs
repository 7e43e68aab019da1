pub mod palette;
pub mod terminal;

// --- 공유 상수 (palette.rs, terminal.rs에서 사용) ---

/// 매핑 없는 상태의 기본 색상 (회색)
pub const FALLBACK_COLOR: &str = "#D3D3D3";
/// 매핑 없는 상태의 기본 이모지
pub const FALLBACK_EMOJI: &str = "";
