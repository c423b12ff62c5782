pub mod advisory;
pub mod crop;
pub mod fertilizer;
pub mod metrics;
pub mod selection;
pub mod weather;

pub use advisory::*;
pub use crop::*;
pub use fertilizer::*;
pub use metrics::*;
pub use selection::*;
pub use weather::*;
