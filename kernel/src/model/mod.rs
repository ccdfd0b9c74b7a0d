pub mod exchange;
pub mod id;
pub mod item;
pub mod stats;
pub mod user;
