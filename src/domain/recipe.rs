// レシピ条件と品質のValue Objects

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 1回の検証に対して外部から与えられるレシピ条件（不変）
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMeta {
    /// 目標スコア
    pub target_score: f64,
    /// 手数の上限
    pub max_moves: usize,
    /// ボーナス対象となる最適手数
    pub optimal_moves: usize,
}

impl RecipeMeta {
    pub fn validate(&self) -> Result<()> {
        if !(self.target_score > 0.0) {
            return Err(anyhow!(
                "目標スコアは正の数である必要があります: {}",
                self.target_score
            ));
        }
        if self.max_moves == 0 {
            return Err(anyhow!("手数上限は1以上である必要があります"));
        }
        if self.optimal_moves == 0 {
            return Err(anyhow!("最適手数は1以上である必要があります"));
        }
        Ok(())
    }
}

/// 品質を表すValue Object (0.0 ~ 1.0)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Quality(f64);

impl Quality {
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(anyhow!("品質は0.0~1.0の範囲: {}", value));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// 失敗確定時の品質（fail-closed の唯一の結果）
    pub fn zero() -> Self {
        Self(0.0)
    }
}
