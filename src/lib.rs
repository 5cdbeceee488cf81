// 醸造パズル検証エンジン - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{BrewVerifier, VerifyRequest};
pub use constants::{H, SYMBOL_COUNT, W};
pub use domain::board::{Board, Symbol};
pub use domain::moves::{Coord, Move};
pub use domain::recipe::{Quality, RecipeMeta};
pub use domain::rng::SeededRng;
