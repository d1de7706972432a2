//! Service metrics

mod prometheus;

pub use self::prometheus::*;
