//! # squares-pipeline
//!
//! Square a list of integers, then keep the even squares, without ever
//! materializing an intermediate collection.
//!
//! ## Pieces
//!
//! 1. **Trait bounds** (`numeric`)
//!    - `Number`: the closed set of primitive integers and floats
//!    - `Integer`: the subset with a parity
//!
//! 2. **Lazy views** (`view`)
//!    - `Transform` / `Filter`: restartable, uncached
//!    - `ViewExt`: `.transform(f)` and `.keep(p)` on any re-iterable source
//!
//! 3. **Output** (`render`, `runner`)
//!    - `render_line`: `"<label>: e1 e2 ... en \n"`
//!    - `PipelineRunner`: wires it together from a `PipelineConfig`
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! # Squared Numbers: 1 4 9 16 25
//! # Even Squared Numbers: 4 16
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod render;
pub mod runner;
pub mod view;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use runner::PipelineRunner;
