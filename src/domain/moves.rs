// 手の適用 - スワップの検証・適用・巻き戻し

use serde::{Deserialize, Serialize};

use crate::domain::board::{in_range, Board};
use crate::domain::cascade::settle;
use crate::domain::matching::has_match;
use crate::domain::rng::SeededRng;
use crate::vlog;

/// 盤面座標（クライアント入力のため符号付きで受ける）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// 盤面内かチェック
    pub fn in_bounds(self) -> bool {
        in_range(self.x as isize, self.y as isize)
    }

    /// マンハッタン距離が1（上下左右の隣接）かチェック
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx + dy == 1
    }
}

/// 1手 = 隣接2セルのスワップ
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

/// 1手を検証して適用する。
///
/// 戻り値 true: 合法手。盤面はスワップ後カスケード解決済み。
/// 戻り値 false: 非合法手。盤面は呼び出し前と完全に同一。
///
/// 範囲外・非隣接は形式エラーだがパニックも例外も出さず、単に
/// 非合法として報告する。スワップ後のマッチ判定は盤面全体の
/// スキャンで行う（局所チェックでは連鎖開始後のマッチを拾えない）。
pub fn apply_move(board: &mut Board, rng: &mut SeededRng, mv: &Move) -> bool {
    if !mv.from.in_bounds() || !mv.to.in_bounds() {
        vlog!("[手] 範囲外のため拒否: {:?}", mv);
        return false;
    }
    if !mv.from.is_adjacent(mv.to) {
        vlog!("[手] 非隣接のため拒否: {:?}", mv);
        return false;
    }

    let (fx, fy) = (mv.from.x as usize, mv.from.y as usize);
    let (tx, ty) = (mv.to.x as usize, mv.to.y as usize);

    let from_cell = *board.cell_mut(fx, fy);
    let to_cell = *board.cell_mut(tx, ty);
    *board.cell_mut(fx, fy) = to_cell;
    *board.cell_mut(tx, ty) = from_cell;

    if !has_match(board) {
        // マッチを作らないスワップは正確に元へ戻す
        *board.cell_mut(fx, fy) = from_cell;
        *board.cell_mut(tx, ty) = to_cell;
        vlog!("[手] マッチ不成立のため巻き戻し: {:?}", mv);
        return false;
    }

    settle(board, rng);
    true
}
