//! dropnote-ui - UI components for dropnote
//!
//! Pure view components plus the browser-interop utilities they need.
//! All state lives in the host application and flows in through props;
//! components report user intent back through event handlers.

pub mod components;
pub mod wasm_utils;

pub use components::*;
