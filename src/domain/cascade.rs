// カスケード解決 - 消去→落下→補充を安定するまで繰り返す

use crate::constants::{H, SYMBOL_COUNT, W};
use crate::domain::board::{Board, Symbol};
use crate::domain::matching::scan_board;
use crate::domain::rng::SeededRng;
use crate::vlog;

/// 盤面を安定させる。1回でも消去パスが走ればtrueを返す。
///
/// 連鎖の深さを再帰で抱えず、スキャン→消去→落下→補充のループとして
/// 回す。補充は盤面生成と同一のシード列から引くこと。ここが環境乱数に
/// なるとシードからの再現検証全体が成立しなくなる。
pub fn settle(board: &mut Board, rng: &mut SeededRng) -> bool {
    let mut cleared_any = false;
    loop {
        let matched = scan_board(board);
        if matched.is_empty() {
            break;
        }
        cleared_any = true;
        vlog!("[カスケード] 消去 {}セル", matched.len());

        for &(x, y) in &matched {
            *board.cell_mut(x, y) = None;
        }
        apply_gravity(board);
        refill(board, rng);
    }
    cleared_any
}

/// 各列を独立に下詰めする（相対順序は保持、空きは上段に集まる）
pub fn apply_gravity(board: &mut Board) {
    for x in 0..W {
        let mut stack: Vec<Symbol> = Vec::with_capacity(H);
        for y in 0..H {
            // top -> bottom
            if let Some(sym) = board.get(x, y) {
                stack.push(sym);
            }
        }
        let empty = H - stack.len();
        for y in 0..H {
            *board.cell_mut(x, y) = if y < empty {
                None
            } else {
                Some(stack[y - empty])
            };
        }
    }
}

/// 空セルをシード列からの新規シンボルで補充する。
/// 列は左から右、列内は上から下の順に引く（再現性のため順序は固定）。
fn refill(board: &mut Board, rng: &mut SeededRng) {
    for x in 0..W {
        for y in 0..H {
            if board.get(x, y).is_none() {
                let idx = rng.next_index(SYMBOL_COUNT);
                // idx < SYMBOL_COUNT が保証されるため失敗しない
                *board.cell_mut(x, y) = Symbol::from_index(idx).ok();
            }
        }
    }
}
