// 並列実行管理 - 複数リクエストの一括検証

use anyhow::{anyhow, Result};
use crossbeam_channel::unbounded;

use crate::application::verify::{BrewVerifier, VerifyRequest};
use crate::domain::recipe::Quality;

/// 並列実行設定
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// ワーカースレッド数
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    pub fn new(num_workers: usize) -> Self {
        Self { num_workers }
    }
}

/// リクエスト列をワーカープールで検証し、入力順に品質を返す。
///
/// 各ワーカーは自分の盤面と乱数列しか触らないため、プール内に
/// ロックは不要。ゲーム的な失敗は品質0として正常値で返り、Errは
/// 構造的な問題（レシピ不正など）のみ。
pub fn verify_batch(requests: &[VerifyRequest], config: &ParallelConfig) -> Result<Vec<Quality>> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }
    if config.num_workers == 0 {
        return Err(anyhow!("ワーカー数は1以上である必要があります"));
    }

    let (task_tx, task_rx) = unbounded::<(usize, VerifyRequest)>();
    let (result_tx, result_rx) = unbounded::<(usize, Result<Quality>)>();

    let num_workers = config.num_workers.min(requests.len());
    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let task_rx = task_rx.clone();
        let result_tx = result_tx.clone();

        handles.push(std::thread::spawn(move || {
            let verifier = BrewVerifier::new();
            while let Ok((index, request)) = task_rx.recv() {
                let quality = verifier.verify_request(&request);
                if result_tx.send((index, quality)).is_err() {
                    break;
                }
            }
        }));
    }
    // 送信側を閉じてワーカーの受信ループを終端させる
    drop(task_rx);
    drop(result_tx);

    for (index, request) in requests.iter().enumerate() {
        task_tx
            .send((index, request.clone()))
            .map_err(|e| anyhow!("タスクの送信に失敗しました: {}", e))?;
    }
    drop(task_tx);

    let mut results: Vec<Option<Quality>> = vec![None; requests.len()];
    for _ in 0..requests.len() {
        let (index, quality) = result_rx
            .recv()
            .map_err(|e| anyhow!("結果の受信に失敗しました: {}", e))?;
        results[index] = Some(quality?);
    }

    for handle in handles {
        if handle.join().is_err() {
            return Err(anyhow!("検証ワーカーが異常終了しました"));
        }
    }

    results
        .into_iter()
        .map(|q| q.ok_or_else(|| anyhow!("検証結果が欠落しています")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::moves::{Coord, Move};
    use crate::domain::recipe::RecipeMeta;

    fn request(seed: &str, moves: Vec<Move>) -> VerifyRequest {
        VerifyRequest {
            seed: seed.to_string(),
            moves,
            recipe: RecipeMeta {
                target_score: 300.0,
                max_moves: 10,
                optimal_moves: 5,
            },
        }
    }

    fn bad_move() -> Move {
        Move {
            from: Coord { x: 0, y: 0 },
            to: Coord { x: 2, y: 0 },
        }
    }

    #[test]
    fn empty_batch_is_ok() {
        let results = verify_batch(&[], &ParallelConfig::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn zero_workers_is_an_error() {
        let requests = vec![request("a", vec![])];
        assert!(verify_batch(&requests, &ParallelConfig::new(0)).is_err());
    }

    #[test]
    fn batch_matches_sequential_results_in_order() {
        let requests = vec![
            request("seed-a", vec![]),
            request("seed-b", vec![bad_move()]),
            request("seed-c", vec![]),
            request("seed-d", vec![bad_move(), bad_move()]),
        ];

        let batch = verify_batch(&requests, &ParallelConfig::new(4)).unwrap();

        let verifier = BrewVerifier::new();
        for (req, got) in requests.iter().zip(&batch) {
            let expected = verifier.verify_request(req).unwrap();
            assert_eq!(got.get(), expected.get());
        }
        // 非隣接手を含む提出は品質0、空の提出はボーナスのみ
        assert_eq!(batch[1].get(), 0.0);
        assert!((batch[0].get() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn batch_with_single_worker_preserves_order() {
        let requests: Vec<_> = (0..8)
            .map(|i| request(&format!("seed-{}", i), vec![]))
            .collect();
        let a = verify_batch(&requests, &ParallelConfig::new(1)).unwrap();
        let b = verify_batch(&requests, &ParallelConfig::new(4)).unwrap();
        assert_eq!(a.len(), 8);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.get(), y.get());
        }
    }

    #[test]
    fn invalid_recipe_in_batch_fails_fast() {
        let mut bad = request("seed", vec![]);
        bad.recipe.target_score = 0.0;
        assert!(verify_batch(&[bad], &ParallelConfig::new(2)).is_err());
    }
}
