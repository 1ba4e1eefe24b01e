pub mod calculate;
pub mod health;
pub mod scores;
