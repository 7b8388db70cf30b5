//! gridoom-core provides the pipeline-as-code machinery used to stream
//! rendered frames towards a recolorable cell grid: the frame processor
//! abstraction, components linked by channels, the frame DTO and the
//! generic processors every pipeline tends to need.

pub mod error;

pub mod pipeline;

pub mod processors;

pub mod traits;

pub mod types;

#[cfg(test)]
mod tests;
