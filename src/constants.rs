// 盤面定数とスコア定数

/// ====== 盤面定数 ======
pub const W: usize = 8;
pub const H: usize = 6;

/// 素材シンボルの種類数
pub const SYMBOL_COUNT: usize = 5;

/// ====== スコア定数 ======
/// 成功した手1回あたりの得点
pub const MOVE_SCORE: f64 = 100.0;

/// 最適手数以内で完了した場合のボーナス
pub const OPTIMAL_BONUS: f64 = 0.1;

/// 盤面生成のリトライ上限（超過は内部エラー扱い）
pub const MAX_GENERATE_RETRIES: usize = 10_000;
