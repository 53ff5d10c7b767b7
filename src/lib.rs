//! prompt-funnel - guides a raw image idea through a three-phase prompt funnel
//!
//! This application walks an idea through a scripted conversation with a
//! text-generation model (strategy menu, recipe menu, final compilation),
//! extracts the compiled prompt from the last response, and hands it to an
//! image-generation service.

pub mod ai;
pub mod app;
pub mod error;
pub mod extract;
pub mod image;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
