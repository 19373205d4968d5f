//! Wrapper synthesis
//!
//! - [`naming`]: full function name → wrapper name
//! - [`emitter`]: parsed signature + wrapper name → one line of C++

pub mod emitter;
pub mod naming;

pub use emitter::{emit_wrapper, WrapperDecl};
pub use naming::{map_name, Namespace};
