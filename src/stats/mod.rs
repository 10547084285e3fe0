pub mod error;
pub mod summary;
pub mod correlation;
pub mod report;

pub use error::*;
pub use summary::*;
pub use correlation::*;
pub use report::*;
