//! Lattice primitives for tight-binding junctions
//!
//! A junction is a stack of `longitudinal` layers along the transport axis `z`, each holding a square
//! `lateral × lateral` cross-section of sites. This crate enumerates those sites in a fixed order and records
//! which pairs of sites are coupled by a nearest-neighbour bond, which is all the NEGF engine needs to place
//! blocks in a Hamiltonian.

mod connectivity;
mod generate;
mod lattice;

pub use connectivity::*;
pub use generate::*;
pub use lattice::*;
