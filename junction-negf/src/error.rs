// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//!
//! Fatal conditions raised by the engine. Non-fatal conditions, such as a surface Green's function which
//! hit its iteration cap or a quadrature which hit its subdivision limit, are not errors: they travel with
//! the result they qualify.

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq)]
/// Problems with the junction description, detected before any matrix is assembled
pub enum ConfigurationError {
    #[error("unsupported number of internal degrees of freedom {0}: expected 1 (scalar) or 2 (Nambu spinor)")]
    #[diagnostic(code(junction_negf::configuration::internal_space))]
    UnsupportedInternalSpace(usize),
    #[error("lattice dimension `{name}` must be non-negative, got {value}")]
    #[diagnostic(code(junction_negf::configuration::negative_dimension))]
    NegativeDimension { name: &'static str, value: i64 },
    #[error("`{name}` must be strictly positive, got {value}")]
    #[diagnostic(code(junction_negf::configuration::non_positive))]
    NonPositive { name: &'static str, value: f64 },
    #[error("a transport calculation needs a non-empty cross-section and at least two layers, got lateral = {lateral}, longitudinal = {longitudinal}")]
    #[diagnostic(code(junction_negf::configuration::lattice))]
    LatticeTooSmall { lateral: usize, longitudinal: usize },
    #[error("`{name}` must lie in [0, 1), got {value}")]
    #[diagnostic(code(junction_negf::configuration::damping))]
    DampingOutOfRange { name: &'static str, value: f64 },
    #[error("{0}")]
    #[diagnostic(code(junction_negf::configuration::sweep))]
    Sweep(String),
}

#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq)]
/// Failures of the dense linear algebra, fatal for the energy or bias point at which they occur
pub enum NumericalError {
    #[error("singular matrix while inverting for the {quantity} at energy {energy}")]
    #[diagnostic(code(junction_negf::numerical::singular))]
    SingularMatrix { quantity: &'static str, energy: f64 },
    #[error("non-finite integrand {value} at energy {energy}")]
    #[diagnostic(code(junction_negf::numerical::non_finite))]
    NonFinite { energy: f64, value: f64 },
}

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum JunctionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Numerical(#[from] NumericalError),
    #[error(transparent)]
    #[diagnostic(code(junction_negf::io_error))]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    Telemetry(#[from] crate::app::TelemetryError),
}
