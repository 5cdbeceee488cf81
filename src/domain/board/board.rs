// Board型 - 8×6の醸造盤面を表現

use anyhow::{anyhow, Result};

use crate::constants::{H, W};
use crate::domain::board::symbol::Symbol;

/// 8×6の盤面。セルはシンボルまたは空（カスケード解決中のみ空が現れる）
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Symbol>; W * H],
}

impl Board {
    /// 新しい空の盤面を作成
    pub fn new() -> Self {
        Self {
            cells: [None; W * H],
        }
    }

    /// セルを取得（範囲外はNone）
    pub fn get(&self, x: usize, y: usize) -> Option<Symbol> {
        if x >= W || y >= H {
            return None;
        }
        self.cells[y * W + x]
    }

    /// セルを設定
    pub fn set(&mut self, x: usize, y: usize, cell: Option<Symbol>) -> Result<()> {
        if x >= W || y >= H {
            return Err(anyhow!("座標が範囲外: ({}, {})", x, y));
        }
        self.cells[y * W + x] = cell;
        Ok(())
    }

    /// エンジン内部用の直接アクセス（範囲は呼び出し側で保証する）
    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> &mut Option<Symbol> {
        &mut self.cells[y * W + x]
    }

    /// 空セルが存在しないかチェック
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// 文字列表現から構築（空白文字は無視、'.'は空セル）
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if chars.len() != W * H {
            return Err(anyhow!("文字数が不正: 期待{}、実際{}", W * H, chars.len()));
        }

        let mut board = Self::new();
        for (i, &ch) in chars.iter().enumerate() {
            let x = i % W;
            let y = i / W;
            let cell = match ch {
                '.' => None,
                _ => Some(Symbol::from_char(ch)?),
            };
            board.set(x, y, cell)?;
        }

        Ok(board)
    }

    /// 文字列表現に変換（1行＝盤面の1段、y=0が先頭行）
    pub fn to_string(&self) -> String {
        let mut s = String::with_capacity((W + 1) * H);
        for y in 0..H {
            for x in 0..W {
                s.push(self.get(x, y).map_or('.', Symbol::to_char));
            }
            s.push('\n');
        }
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_all_empty() {
        let board = Board::new();
        for y in 0..H {
            for x in 0..W {
                assert_eq!(board.get(x, y), None);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn set_and_get_work() {
        let mut board = Board::new();
        board.set(2, 3, Some(Symbol::Crystal)).unwrap();
        assert_eq!(board.get(2, 3), Some(Symbol::Crystal));
    }

    #[test]
    fn out_of_bounds_get_returns_none() {
        let board = Board::new();
        assert_eq!(board.get(W, 0), None);
        assert_eq!(board.get(0, H), None);
    }

    #[test]
    fn set_out_of_bounds_fails() {
        let mut board = Board::new();
        assert!(board.set(W, 0, None).is_err());
        assert!(board.set(0, H, None).is_err());
    }

    #[test]
    fn from_string_parses_correctly() {
        let s = ".".repeat(W * H);
        let board = Board::from_string(&s).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn from_string_rejects_wrong_length() {
        assert!(Board::from_string("HCM").is_err());
    }

    #[test]
    fn from_string_rejects_unknown_char() {
        let mut s = ".".repeat(W * H);
        s.replace_range(0..1, "Z");
        assert!(Board::from_string(&s).is_err());
    }

    #[test]
    fn to_string_roundtrip() {
        let mut board = Board::new();
        board.set(0, 0, Some(Symbol::Herb)).unwrap();
        board.set(3, 2, Some(Symbol::Root)).unwrap();
        board.set(W - 1, H - 1, Some(Symbol::Flower)).unwrap();

        let s = board.to_string();
        let board2 = Board::from_string(&s).unwrap();
        assert_eq!(board, board2);
    }
}
