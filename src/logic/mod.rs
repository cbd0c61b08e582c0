pub mod lookup;
pub mod resolve;

pub use lookup::*;
pub use resolve::*;
