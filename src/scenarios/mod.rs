mod noise;
mod pricing;
mod roshambo;
mod scenario;
mod spike;

pub use noise::*;
pub use pricing::*;
pub use roshambo::*;
pub use scenario::*;
pub use spike::*;
