//! The presentation surface boundary: raster drawing commands and DOM
//! mutations. The page is an external collaborator that executes these;
//! nothing in the core reaches past this module to touch presentation.

pub mod canvas;
pub mod dom;

pub use canvas::{CanvasCommand, CanvasFrame, Rgba};
pub use dom::{DomBatch, DomCommand, DomOp, DomTarget};
