pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod opponent;
pub mod report;
pub mod scripts;

pub use error::WorkshopError;
