pub mod household;
pub mod report;
pub mod types;

pub use household::*;
pub use report::*;
pub use types::*;
