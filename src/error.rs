use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum WorkshopError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
