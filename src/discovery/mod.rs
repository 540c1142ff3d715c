mod detection;
mod endpoint;

pub use detection::*;
pub use endpoint::*;
