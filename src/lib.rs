//! Randomized colour matrix generation under supply and adjacency constraints
//!
//! Given an inventory of colours, each with a fixed panel supply, and a grid
//! size, the generator assigns a colour to every cell so that no two cells
//! adjacent along either axis share a colour. Requests that cannot work out
//! are detected up front; the rest get a bounded number of randomized attempts.

#![forbid(unsafe_code)]

/// Generation engine: feasibility checks, pool, selection and retries
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Inventory, grid and outcome types
pub mod model;
/// Stateful session that regenerates after every mutation
pub mod session;

pub use algorithm::executor::{Generation, MatrixGenerator};
pub use io::error::{AlgorithmError, Result};
pub use model::{ColourEntry, ColourMatrix, GenerationOutcome, GridSpec, Inventory};
pub use session::PanelStore;
