pub mod checklist;
pub mod common;
pub mod detail;
pub mod instrument;
pub mod table;

pub use checklist::*;
pub use common::*;
pub use detail::*;
pub use instrument::*;
pub use table::*;
