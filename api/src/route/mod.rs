pub mod api;
pub mod exchange;
pub mod health;
pub mod item;
pub mod stats;
pub mod user;
