// 検証過程の詳細ログ（デフォルト無効・ファイル出力のみ）

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル
static LOG_FILE: Mutex<Option<BufWriter<std::fs::File>>> = Mutex::new(None);

/// 経過時間プレフィックス用の基準時刻
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// ログファイルを初期化する
pub fn init_log_file(path: &str) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    START_TIME.get_or_init(Instant::now);
    let mut log_file = LOG_FILE.lock().unwrap();
    *log_file = Some(BufWriter::new(file));
    Ok(())
}

/// ログを経過時間付きでファイルに書き込む
pub fn write_log(message: String) {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let elapsed = START_TIME.get_or_init(Instant::now).elapsed();
            let _ = writeln!(file, "[{:9.3}s] {}", elapsed.as_secs_f64(), message);
            let _ = file.flush();
        }
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ（ファイル出力）
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_toggles() {
        enable_verbose_logging();
        assert!(is_verbose());
        disable_verbose_logging();
        assert!(!is_verbose());
    }

    #[test]
    fn write_log_without_file_is_a_noop() {
        // ログファイル未初期化でも落ちないこと
        write_log("破棄されるメッセージ".to_string());
    }
}
