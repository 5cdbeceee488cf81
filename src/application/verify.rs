// 醸造検証サービス - 提出された手順のリプレイ検証

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{MOVE_SCORE, OPTIMAL_BONUS};
use crate::domain::generate::generate_board;
use crate::domain::moves::{apply_move, Move};
use crate::domain::recipe::{Quality, RecipeMeta};
use crate::domain::rng::SeededRng;
use crate::vlog;

/// 検証1回分のリクエスト（ホストとの受け渡し用）
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub seed: String,
    pub moves: Vec<Move>,
    pub recipe: RecipeMeta,
}

/// 提出された手順をシードからリプレイして品質を算出するサービス。
///
/// fail-closed・全か無か: 手順中に1つでも非合法手があれば提出全体を
/// 品質0として棄却する。部分点はない。形式不正（範囲外・非隣接）と
/// ゲーム的不成立（マッチなし）をあえて区別しないことで、攻撃者に
/// 「惜しい」と「でたらめ」を見分けるサイドチャネルを与えない。
///
/// `verify` は入力のみの純関数であり、共有状態の読み書きもI/Oも
/// 行わない。Errは構造的な問題（レシピ不正・生成リトライ上限）に
/// 限られ、ゲーム的な失敗はすべて Ok(品質0) に畳む。
pub struct BrewVerifier;

impl BrewVerifier {
    pub fn new() -> Self {
        Self
    }

    /// 検証のメインユースケース
    pub fn verify(&self, seed: &str, moves: &[Move], recipe: &RecipeMeta) -> Result<Quality> {
        recipe.validate().context("レシピ条件が不正です")?;

        // 手数超過は盤面に触れる前に棄却する
        if moves.len() > recipe.max_moves {
            vlog!(
                "[検証] 手数超過のため棄却: {} > {}",
                moves.len(),
                recipe.max_moves
            );
            return Ok(Quality::zero());
        }

        let mut rng = SeededRng::new(seed);
        let mut board = generate_board(&mut rng).context("初期盤面の生成に失敗しました")?;

        for (i, mv) in moves.iter().enumerate() {
            if !apply_move(&mut board, &mut rng, mv) {
                vlog!("[検証] {}手目が非合法のため棄却", i + 1);
                return Ok(Quality::zero());
            }
        }

        // 全手成功。1手100点の固定スコア
        let score = moves.len() as f64 * MOVE_SCORE;
        let fraction = (score / recipe.target_score).min(1.0);
        let bonus = if moves.len() <= recipe.optimal_moves {
            OPTIMAL_BONUS
        } else {
            0.0
        };
        let quality = Quality::new((fraction + bonus).min(1.0))?;

        vlog!(
            "[検証] 成功: {}手 score={} fraction={:.3} bonus={:.1} quality={:.3}",
            moves.len(),
            score,
            fraction,
            bonus,
            quality.get()
        );
        Ok(quality)
    }

    /// リクエスト構造体を受ける形のエントリポイント
    pub fn verify_request(&self, request: &VerifyRequest) -> Result<Quality> {
        self.verify(&request.seed, &request.moves, &request.recipe)
    }
}

impl Default for BrewVerifier {
    fn default() -> Self {
        Self::new()
    }
}
