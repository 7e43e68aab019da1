//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::target::{Target, DEFAULT_TARGET};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "JAMODLE_CONFIG";

/// 게임 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameConfig {
    /// 정답 단어 (완성형 한글 두 글자)
    #[serde(default = "default_target_word")]
    pub target_word: String,
    /// 타일 배경색 출력
    #[serde(default = "default_true")]
    pub use_color: bool,
    /// 이모지 줄 출력
    #[serde(default = "default_true")]
    pub show_emoji: bool,
}

fn default_target_word() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_word: default_target_word(),
            use_color: default_true(),
            show_emoji: default_true(),
        }
    }
}

impl GameConfig {
    /// 설정의 정답 단어. 잘못된 값이면 기본 정답으로 대체
    pub fn target(&self) -> Target {
        Target::new(&self.target_word).unwrap_or_else(|e| {
            log::warn!(
                "설정의 정답 단어 {:?} 무시 ({}), 기본값 사용",
                self.target_word,
                e
            );
            Target::default()
        })
    }
}

/// 설정 파일 경로: $JAMODLE_CONFIG 또는 ~/.config/jamodle/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jamodle").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> GameConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(_) => {
            log::debug!("설정 파일 없음: {}", path.display());
            GameConfig::default()
        }
    }
}

/// JSON 문자열 파싱 (실패 시 기본값)
pub fn parse_config(content: &str) -> GameConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패: {}", e);
        GameConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(config: &GameConfig) -> Result<PathBuf, String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(path)
}
