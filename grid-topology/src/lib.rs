//! A crate to generate grid neighbourhood topologies.
//!
//! A topology is a directed graph over the nodes of a square grid, connecting each ordered pair
//! of nodes whose grid positions lie within a given Euclidean distance of each other.
//! This crate offers the grid index arithmetic, the construction of such topologies as
//! `petgraph` graphs, as well as methods for reading and writing them as edge list files.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// Contains the error types used by this crate.
pub mod error;
/// Contains the square grid layout and its node index arithmetic.
pub mod grid;
/// Contains functions for reading and writing topologies.
pub mod io;
/// Contains functions to create topology graphs.
pub mod topology;
/// Contains type aliases for topology graphs.
pub mod types;

pub use petgraph;
