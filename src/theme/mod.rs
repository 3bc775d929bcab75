//! Theme for Mission Board.

mod styles;

pub use styles::GLOBAL_STYLES;
