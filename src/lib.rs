// Library exports for the arena-search decision engine
// Games plug in by implementing types::GameState and supplying an evaluator

pub mod cache;
pub mod combos;
pub mod config;
pub mod decision_log;
pub mod search;
pub mod team;
pub mod types;
