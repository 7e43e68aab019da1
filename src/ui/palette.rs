//! 상태별 표시 색상/이모지 테이블

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{FALLBACK_COLOR, FALLBACK_EMOJI};
use crate::core::feedback::MatchStatus;

lazy_static! {
    /// 상태 -> 타일 배경색
    static ref COLOR_MAP: HashMap<MatchStatus, &'static str> = {
        let mut m = HashMap::new();
        m.insert(MatchStatus::Exact, "#6C3C0C"); // 갈색
        m.insert(MatchStatus::StrongPartial, "#FF69B4"); // 분홍색
        m.insert(MatchStatus::ConsonantMismatchPartial, "#FAEBD7"); // 베이지색
        m.insert(MatchStatus::SingleMatch, "#800080"); // 보라색
        m.insert(MatchStatus::ElsewhereMatch, "#FFFF00"); // 노랑색
        m.insert(MatchStatus::NoMatch, "#FF0000"); // 빨강색
        m
    };

    /// 상태 -> 이모지
    static ref EMOJI_MAP: HashMap<MatchStatus, &'static str> = {
        let mut m = HashMap::new();
        m.insert(MatchStatus::Exact, "🦌");
        m.insert(MatchStatus::StrongPartial, "🍄");
        m.insert(MatchStatus::ConsonantMismatchPartial, "🧄");
        m.insert(MatchStatus::SingleMatch, "🍆");
        m.insert(MatchStatus::ElsewhereMatch, "🍌");
        m.insert(MatchStatus::NoMatch, "🍎");
        m
    };
}

pub fn color_for(status: MatchStatus) -> &'static str {
    COLOR_MAP.get(&status).copied().unwrap_or(FALLBACK_COLOR)
}

pub fn emoji_for(status: MatchStatus) -> &'static str {
    EMOJI_MAP.get(&status).copied().unwrap_or(FALLBACK_EMOJI)
}

/// 이름(녹용, 버섯 ...)으로 색상 조회. 모르는 이름은 회색
pub fn color_for_label(label: &str) -> &'static str {
    MatchStatus::from_label(label)
        .map(color_for)
        .unwrap_or(FALLBACK_COLOR)
}

/// 이름으로 이모지 조회. 모르는 이름은 빈 문자열
pub fn emoji_for_label(label: &str) -> &'static str {
    MatchStatus::from_label(label)
        .map(emoji_for)
        .unwrap_or(FALLBACK_EMOJI)
}

/// "#RRGGBB" -> (r, g, b)
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_mapped() {
        for status in MatchStatus::ALL {
            assert_ne!(color_for(status), FALLBACK_COLOR);
            assert_ne!(emoji_for(status), FALLBACK_EMOJI);
        }
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(color_for_label("녹용"), "#6C3C0C");
        assert_eq!(emoji_for_label("마늘"), "🧄");
        assert_eq!(emoji_for_label("사과"), "🍎");
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(color_for_label("수박"), "#D3D3D3");
        assert_eq!(emoji_for_label("수박"), "");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#6C3C0C"), Some((0x6C, 0x3C, 0x0C)));
        assert_eq!(hex_to_rgb("#ffff00"), Some((255, 255, 0)));
        assert_eq!(hex_to_rgb("FFFF00"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
    }
}
