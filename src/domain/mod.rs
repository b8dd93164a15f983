// Domain layer: graph model, traversal and condensation. Pure and synchronous.
pub mod condensation;
pub mod dfs;
pub mod error;
pub mod graph;
pub mod traits;
