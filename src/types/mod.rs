pub mod flight;
pub mod outcome;
pub mod summary;

pub use flight::*;
pub use outcome::*;
pub use summary::*;
