pub mod exchange;
pub mod item;
pub mod user;
