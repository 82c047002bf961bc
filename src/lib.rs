mod bucket;
mod config;
mod engine;
mod error;
mod operands;
mod operation;
mod scaling;
mod sweep;

pub use self::bucket::*;
pub use self::config::*;
pub use self::engine::*;
pub use self::error::*;
pub use self::operands::*;
pub use self::operation::*;
pub use self::scaling::*;
pub use self::sweep::*;
