//! Data models for the shell layer.
//!
//! - [`Mod`]: a single installed modification as the backend reports it
//! - [`ModChangeEvent`]: one incremental mutation of the backend's mod registry
//!
//! All models mirror backend-owned data. The shell never constructs or
//! mutates a [`Mod`] on its own; it only applies what the backend pushes
//! through the [`ModMirror`](crate::state::ModMirror).

pub mod modification;

pub use modification::{Mod, ModChangeEvent};
