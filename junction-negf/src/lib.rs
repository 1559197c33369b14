// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Junction-negf computes the current through superconducting junctions in the Bogoliubov-de Gennes formalism
//!
//! # Overview
//! A normal channel on a cubic lattice is attached at either end to a semi-infinite superconducting lead. The
//! current is found with the non-equilibrium Green's function approach: the leads are folded into self energies
//! on the end layers of the channel through their surface Green's functions, the correlation function of the
//! channel is assembled from the lead occupations, and the energy resolved current between the first two layers
//! is integrated over the transport window of each bias to give an I-V characteristic.
//!
//! Each lattice site carries either a scalar orbital or an electron-hole Nambu spinor. In the latter case the
//! leads can carry a pairing potential and the engine captures Andreev reflection at the interfaces.
//!
//! # Usage
//! A junction is described in a `.toml` file:
//!
//! ```toml
//! [lattice]
//! lateral = 1
//! longitudinal = 4
//! internal = 2
//!
//! [physics]
//! eta = 1.0e-5
//! t = 1.0
//! mu = 2.0
//! mu_1 = 0.0
//! mu_2 = 0.0
//! delta_1 = [0.0, 0.0]
//! delta_2 = [0.05, 0.0]
//! kt = 1.0e-3
//!
//! [sweep]
//! minimum = 0.0
//! maximum = 0.03
//! number_of_points = 25
//! ```
//!
//! and evaluated with [`app::run`], or assembled by hand through [`junction::JunctionBuilder`] and swept with
//! [`sweep::BiasSweep`].

#![allow(clippy::type_complexity)]

/// Configuration, tracing and the top level run
pub mod app;

/// Lattice extent, internal space and physical parameters
pub mod device;

/// Error handling
pub mod error;

/// Lead occupations
pub mod fermi;

/// Greens function methods
pub mod greens_functions;

/// System Hamiltonian
pub mod hamiltonian;

/// The junction, evaluated at a single energy
pub mod junction;

/// Computes the current from the correlation function
pub mod postprocessor;

/// Self energies of the contacts
pub mod self_energy;

/// Energy windows and adaptive quadrature
pub mod spectral;

/// Bias sweeps and differential conductance
pub mod sweep;

/// Helper functions
pub mod utilities;

pub use error::{ConfigurationError, JunctionError, NumericalError};
