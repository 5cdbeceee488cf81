// アプリケーション層 - 検証ユースケース

pub mod verify;

pub use verify::{BrewVerifier, VerifyRequest};
