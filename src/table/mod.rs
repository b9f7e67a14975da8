mod domain;
mod error;
mod lines;
mod matrix;
mod payoff;
mod record;
mod table;

pub use domain::*;
pub use error::*;
pub use lines::*;
pub use matrix::*;
pub use payoff::*;
pub use record::*;
pub use table::*;
