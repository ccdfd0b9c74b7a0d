pub mod exchange;
pub mod item;
pub mod stats;
pub mod user;
