// ドメイン層 - 醸造パズルエンジンの中核

pub mod board;
pub mod cascade;
pub mod generate;
pub mod matching;
pub mod moves;
pub mod recipe;
pub mod rng;
