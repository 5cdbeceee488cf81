// 初期盤面生成 - シード列からマッチなし盤面を作る

use anyhow::{anyhow, Result};

use crate::constants::{H, MAX_GENERATE_RETRIES, SYMBOL_COUNT, W};
use crate::domain::board::{Board, Symbol};
use crate::domain::matching::has_match;
use crate::domain::rng::SeededRng;
use crate::vlog;

/// シード列からマッチなしの初期盤面を生成する。
///
/// 全セルを行優先（y外側・x内側）で列から引いて埋め、盤面全体を
/// スキャンして3連があれば破棄し、同じ進行中の列から引き直す
/// （シードを作り直すのではない点が重要）。5種48セルなら実用上
/// 数回で収束するが、念のため上限超過は不正盤面を返す代わりに
/// 内部エラーとする。
pub fn generate_board(rng: &mut SeededRng) -> Result<Board> {
    for attempt in 0..MAX_GENERATE_RETRIES {
        let mut board = Board::new();
        for y in 0..H {
            for x in 0..W {
                let sym = Symbol::from_index(rng.next_index(SYMBOL_COUNT))?;
                *board.cell_mut(x, y) = Some(sym);
            }
        }
        if !has_match(&board) {
            if attempt > 0 {
                vlog!("[生成] {}回目の引き直しで確定", attempt + 1);
            }
            return Ok(board);
        }
    }
    Err(anyhow!(
        "盤面生成が{}回のリトライで収束しませんでした",
        MAX_GENERATE_RETRIES
    ))
}
