pub mod chart;
pub mod health;
