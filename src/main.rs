// brewform CLI - 検証リクエストのアドホック実行ツール

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use brewform::domain::generate::generate_board;
use brewform::infrastructure::{verify_batch, ParallelConfig};
use brewform::{BrewVerifier, SeededRng, VerifyRequest};

#[derive(Parser)]
#[command(name = "brewform")]
#[command(about = "シード決定的なマッチ3醸造検証エンジン")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// 詳細ログを有効にする（出力先は --log、既定: brewform.log）
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 詳細ログの出力ファイル（指定時は --verbose も有効になる）
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// リクエスト1件を検証して品質を表示
    Verify {
        /// リクエストJSONのパス
        request: PathBuf,
    },
    /// リクエスト配列を並列検証
    Batch {
        /// リクエスト配列JSONのパス
        requests: PathBuf,
        /// ワーカースレッド数（既定: CPU数）
        #[arg(long)]
        workers: Option<usize>,
    },
    /// シードから初期盤面を生成して表示
    Board {
        /// シード文字列
        seed: String,
    },
}

fn run_verify(path: &PathBuf) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("読み込み失敗: {}", path.display()))?;
    let request: VerifyRequest =
        serde_json::from_str(&text).context("リクエストJSONの解析に失敗しました")?;

    let quality = BrewVerifier::new().verify_request(&request)?;
    println!("{}", serde_json::json!({ "quality": quality.get() }));
    Ok(())
}

fn run_batch(path: &PathBuf, workers: Option<usize>) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("読み込み失敗: {}", path.display()))?;
    let requests: Vec<VerifyRequest> =
        serde_json::from_str(&text).context("リクエスト配列JSONの解析に失敗しました")?;

    let config = match workers {
        Some(n) => ParallelConfig::new(n),
        None => ParallelConfig::default(),
    };
    let results = verify_batch(&requests, &config)?;

    let qualities: Vec<f64> = results.iter().map(|q| q.get()).collect();
    println!("{}", serde_json::json!({ "qualities": qualities }));
    Ok(())
}

fn run_board(seed: &str) -> Result<()> {
    let mut rng = SeededRng::new(seed);
    let board = generate_board(&mut rng)?;
    print!("{}", board.to_string());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose || args.log.is_some() {
        let path = args
            .log
            .clone()
            .unwrap_or_else(|| PathBuf::from("brewform.log"));
        brewform::logging::init_log_file(&path.to_string_lossy())
            .with_context(|| format!("ログファイルを開けません: {}", path.display()))?;
        brewform::logging::enable_verbose_logging();
    }

    match &args.command {
        Command::Verify { request } => run_verify(request),
        Command::Batch { requests, workers } => run_batch(requests, *workers),
        Command::Board { seed } => run_board(seed),
    }
}
