//! Configuration loading and resolution.
//!
//! Settings come from three layers in ascending precedence: default config
//! file locations, `HUBSCOUT__`-prefixed environment variables, and CLI
//! arguments. `resolve` is the entry point and returns a validated
//! [`ResolvedSettings`].

mod raw;
mod resolved;
mod sources;

pub use resolved::{ResolvedSettings, resolve};
