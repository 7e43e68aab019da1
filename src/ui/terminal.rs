//! 터미널 출력
//!
//! 히스토리 한 줄을 색 타일 + 이모지 줄로 그립니다.

use super::palette::{color_for, emoji_for, hex_to_rgb};
use crate::core::feedback::{FeedbackEntry, MatchStatus};

const RESET: &str = "\x1b[0m";

/// 터미널 렌더러
#[derive(Debug, Clone, Copy)]
pub struct TerminalRenderer {
    /// ANSI 24비트 배경색 사용
    pub use_color: bool,
    /// 타일 아래 이모지 줄 출력
    pub show_emoji: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            use_color: true,
            show_emoji: true,
        }
    }
}

impl TerminalRenderer {
    pub fn new(use_color: bool, show_emoji: bool) -> Self {
        Self {
            use_color,
            show_emoji,
        }
    }

    /// 글자 타일 하나
    fn tile(&self, ch: char, status: MatchStatus) -> String {
        if !self.use_color {
            return format!("[{}]", ch);
        }
        match hex_to_rgb(color_for(status)) {
            Some((r, g, b)) => {
                // 밝은 배경에는 검은 글자
                let luminance = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
                let fg = if luminance > 128_000 { "30" } else { "97" };
                format!("\x1b[48;2;{};{};{}m\x1b[{};1m {} {}", r, g, b, fg, ch, RESET)
            }
            None => format!("[{}]", ch),
        }
    }

    /// 히스토리 한 줄 (타일 줄 + 이모지 줄)
    pub fn render_row(&self, feedback: &[FeedbackEntry]) -> String {
        let tiles: Vec<String> = feedback.iter().map(|f| self.tile(f.ch, f.status)).collect();
        let mut out = tiles.join(" ");

        if self.show_emoji {
            let emojis: Vec<&str> = feedback.iter().map(|f| emoji_for(f.status)).collect();
            out.push('\n');
            out.push_str(&emojis.join("  "));
        }
        out
    }

    /// 상태 설명표
    pub fn render_legend(&self) -> String {
        MatchStatus::ALL
            .iter()
            .map(|&status| {
                let description = match status {
                    MatchStatus::Exact => "정확히 일치",
                    MatchStatus::StrongPartial => "첫 자음 + 자모 2개 이상 일치",
                    MatchStatus::ConsonantMismatchPartial => "첫 자음 외 자모 2개 이상 일치",
                    MatchStatus::SingleMatch => "자모 하나만 일치",
                    MatchStatus::ElsewhereMatch => "다른 글자의 자모와 일치",
                    MatchStatus::NoMatch => "일치하지 않음",
                };
                if self.show_emoji {
                    format!("{} {}: {}", emoji_for(status), status.label(), description)
                } else {
                    format!("{}: {}", status.label(), description)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 정답 배너
    pub fn render_banner(&self) -> String {
        let text = "🎉 정답입니다! 🎉";
        if self.use_color {
            format!("\x1b[1;32m{}{}", text, RESET)
        } else {
            text.to_string()
        }
    }

    /// 하단 문구
    pub fn render_footer(&self, attempts: usize) -> String {
        format!("{}번 만에 맞혔습니다.", attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Vec<FeedbackEntry> {
        vec![
            FeedbackEntry {
                ch: '간',
                status: MatchStatus::ConsonantMismatchPartial,
            },
            FeedbackEntry {
                ch: '호',
                status: MatchStatus::ElsewhereMatch,
            },
        ]
    }

    #[test]
    fn test_plain_row() {
        let renderer = TerminalRenderer::new(false, true);
        assert_eq!(renderer.render_row(&row()), "[간] [호]\n🧄  🍌");
    }

    #[test]
    fn test_plain_row_without_emoji() {
        let renderer = TerminalRenderer::new(false, false);
        assert_eq!(renderer.render_row(&row()), "[간] [호]");
    }

    #[test]
    fn test_colored_row() {
        let renderer = TerminalRenderer::default();
        let out = renderer.render_row(&row());
        // 베이지 배경(FAEBD7) 위 검은 글자
        assert!(out.contains("\x1b[48;2;250;235;215m\x1b[30;1m 간 "));
        // 노랑 배경
        assert!(out.contains("\x1b[48;2;255;255;0m"));
        assert!(out.ends_with("🧄  🍌"));
    }

    #[test]
    fn test_dark_tile_uses_light_text() {
        let renderer = TerminalRenderer::default();
        let out = renderer.render_row(&[FeedbackEntry {
            ch: '한',
            status: MatchStatus::Exact,
        }]);
        assert!(out.contains("\x1b[97;1m 한 "));
    }

    #[test]
    fn test_legend_lists_all_statuses() {
        let legend = TerminalRenderer::new(false, true).render_legend();
        assert_eq!(legend.lines().count(), 6);
        assert!(legend.starts_with("🦌 녹용"));
    }

    #[test]
    fn test_footer() {
        let renderer = TerminalRenderer::default();
        assert_eq!(renderer.render_footer(3), "3번 만에 맞혔습니다.");
        assert_eq!(TerminalRenderer::new(false, false).render_banner(), "🎉 정답입니다! 🎉");
    }
}
