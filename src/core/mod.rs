pub mod adults;
pub mod grades;
pub mod loader;

pub use crate::domain::model::{Record, UserRecord, ADULT_AGE};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
