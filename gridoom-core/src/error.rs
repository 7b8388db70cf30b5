use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    #[error("No raw frame to process")]
    NoRawFrame,

    #[error("No cell grid to paint")]
    NoCellGrid,
}
