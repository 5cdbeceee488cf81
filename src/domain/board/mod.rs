// 盤面関連のドメイン層

pub mod board;
pub mod symbol;

pub use board::Board;
pub use symbol::{Symbol, ALL_SYMBOLS};

use crate::constants::{H, W};

/// 符号付き座標が盤面内かチェック
#[inline]
pub fn in_range(x: isize, y: isize) -> bool {
    x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H
}
