//! neologdish - 일본어 텍스트 정규화 CLI

use clap::Parser;
use neologdish::config::{load_config, load_config_or_default, parse_key, ConfigError};
use neologdish::Normalizer;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "neologdish", about = "Normalize Japanese text by the neologd convention")]
struct Cli {
    /// Texts to normalize (default: read lines from stdin)
    texts: Vec<String>,

    /// Config file path (default: ~/.config/neologdish/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra conversion entry, e.g. -m '０=零' (repeatable)
    #[arg(short, long = "map", value_name = "KEY=VALUE")]
    maps: Vec<String>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

/// "KEY=VALUE" 파싱 (값은 비어 있어도 됨)
fn parse_map_entry(entry: &str) -> Result<(char, String), ConfigError> {
    let (key, value) = entry.split_once('=').ok_or_else(|| {
        ConfigError::FormatError(format!("KEY=VALUE 형식이 아닙니다: {:?}", entry))
    })?;
    Ok((parse_key(key)?, value.to_string()))
}

fn build_normalizer(cli: &Cli) -> Result<Normalizer, ConfigError> {
    let config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => load_config_or_default(),
    };

    let mut normalizer = config.build_normalizer()?;
    // CLI 항목이 설정 파일보다 우선
    for entry in &cli.maps {
        let (key, value) = parse_map_entry(entry)?;
        normalizer.insert(key, value);
    }
    log::info!("사용자 치환 항목 {}개", normalizer.overrides().len());
    Ok(normalizer)
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let normalizer = build_normalizer(&cli).unwrap_or_else(|e| die(&e.to_string()));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = if cli.texts.is_empty() {
        let stdin = io::stdin();
        stdin.lock().lines().try_for_each(|line| {
            let line = line?;
            writeln!(out, "{}", normalizer.normalize(&line))
        })
    } else {
        cli.texts
            .iter()
            .try_for_each(|text| writeln!(out, "{}", normalizer.normalize(text)))
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        // 파이프가 닫힌 경우는 정상 종료
        if e.kind() != io::ErrorKind::BrokenPipe {
            die(&e.to_string());
        }
    }
}
