//! Output module
//!
//! Writes rendered declaration files to the output directory, one file per
//! resource. File names follow `<resource><extension>` where the extension
//! comes from the active dialect.

mod writer;

pub use writer::{declaration_path, write_declarations};

#[cfg(test)]
mod tests;
