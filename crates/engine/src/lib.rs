pub mod board;
pub mod logger;
pub mod perft;
pub mod types;

pub use board::*;
pub use logger::GameLogger;
pub use perft::*;
pub use types::*;
