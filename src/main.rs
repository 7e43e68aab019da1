//! Jamodle - 두 글자 한글 자모 맞히기 게임

use jamodle::config::{load_config, save_config, GameConfig};
use jamodle::game::{GuessRecord, Session};
use jamodle::ui::terminal::TerminalRenderer;
use std::io::{self, BufRead, Write};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 기본 설정 파일 생성
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        match save_config(&GameConfig::default()) {
            Ok(path) => println!("설정 파일 생성: {}", path.display()),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // 설정 로드
    let config = load_config();
    let renderer = TerminalRenderer::new(config.use_color, config.show_emoji);

    let mut session = Session::new(config.target());

    // 출력은 콜백으로만 처리
    session.set_render_callback(move |record: &GuessRecord| {
        println!("{}", renderer.render_row(&record.feedback));
    });
    session.set_solved_callback(move |attempts| {
        println!();
        println!("{}", renderer.render_banner());
        println!("{}", renderer.render_footer(attempts));
    });

    println!("두 글자 한글 단어를 맞혀 보세요.");
    println!("{}", renderer.render_legend());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_solved() {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            log::error!("출력 실패: {}", e);
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
            None => break,
        };

        if line.trim().is_empty() {
            continue;
        }

        // 거부된 입력은 메시지만 출력하고 계속
        if let Err(e) = session.submit(&line) {
            eprintln!("{}", e);
        }
    }

    if !session.is_solved() {
        println!();
        println!("정답은 '{}'였습니다.", session.target().as_string());
    }
}
