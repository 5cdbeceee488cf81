// インフラ層 - 並列実行などの技術的実装

pub mod executor;

pub use executor::{verify_batch, ParallelConfig};
