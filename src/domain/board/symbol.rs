// 素材シンボル型定義

use anyhow::{anyhow, Result};

use crate::constants::SYMBOL_COUNT;

/// 盤面セルを占める醸造素材シンボル
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Herb,     // 'H' 薬草
    Crystal,  // 'C' 結晶
    Mushroom, // 'M' キノコ
    Flower,   // 'F' 花
    Root,     // 'R' 根
}

/// 全シンボルの一覧（インデックス順）
pub const ALL_SYMBOLS: [Symbol; SYMBOL_COUNT] = [
    Symbol::Herb,
    Symbol::Crystal,
    Symbol::Mushroom,
    Symbol::Flower,
    Symbol::Root,
];

impl Symbol {
    /// 乱数インデックス(0..SYMBOL_COUNT)からシンボルへ変換
    pub fn from_index(i: usize) -> Result<Self> {
        ALL_SYMBOLS
            .get(i)
            .copied()
            .ok_or_else(|| anyhow!("シンボルインデックスが範囲外: {}", i))
    }

    /// シンボルをラベル文字に変換
    pub fn to_char(self) -> char {
        match self {
            Symbol::Herb => 'H',
            Symbol::Crystal => 'C',
            Symbol::Mushroom => 'M',
            Symbol::Flower => 'F',
            Symbol::Root => 'R',
        }
    }

    /// ラベル文字からシンボルへ変換
    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            'H' => Ok(Symbol::Herb),
            'C' => Ok(Symbol::Crystal),
            'M' => Ok(Symbol::Mushroom),
            'F' => Ok(Symbol::Flower),
            'R' => Ok(Symbol::Root),
            _ => Err(anyhow!("不正なシンボル文字: '{}'", ch)),
        }
    }
}
