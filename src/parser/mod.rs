pub mod fix;
pub mod header;
pub mod line;
pub mod main;
pub mod time;

pub use fix::*;
pub use header::*;
pub use line::*;
pub use main::*;
pub use time::*;
