// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Spectral
//!
//! The energy window of a biased junction and the adaptive quadrature used to integrate the energy resolved
//! current over it.
//!
//! Transport at bias `V` is confined to energies within a few `|V|` of the mean chemical potential, so the window
//! is `[-w |V|, w |V|]` for a configurable scale `w`. An unbiased junction has an empty window and carries no
//! current.

mod quadrature;

pub use quadrature::{AdaptiveQuadrature, IntegrationOutput, EVALUATIONS_PER_PANEL};

use crate::{error::ConfigurationError, postprocessor::CurrentChannel};
use serde::Deserialize;

/// The energy interval over which the current is integrated
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyWindow {
    pub lower: f64,
    pub upper: f64,
}

impl EnergyWindow {
    /// The window `[-scale |bias|, scale |bias|]`
    pub fn for_bias(bias: f64, scale: f64) -> Self {
        let half_width = scale * bias.abs();
        Self {
            lower: -half_width,
            upper: half_width,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.
    }
}

/// Controls for the energy integral at each bias point
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    /// The half width of the energy window in units of the bias
    pub window_scale: f64,
    pub absolute_tolerance: f64,
    pub relative_tolerance: f64,
    pub maximum_subdivisions: usize,
    /// The component of the current which is integrated
    pub channel: CurrentChannel,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            window_scale: 1.5,
            absolute_tolerance: 1.49e-8,
            relative_tolerance: 1.49e-8,
            maximum_subdivisions: 50,
            channel: CurrentChannel::Representative,
        }
    }
}

impl IntegrationSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [
            ("window_scale", self.window_scale),
            ("absolute_tolerance", self.absolute_tolerance),
            ("relative_tolerance", self.relative_tolerance),
            ("maximum_subdivisions", self.maximum_subdivisions as f64),
        ] {
            if !(value > 0.) {
                return Err(ConfigurationError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    pub fn window(&self, bias: f64) -> EnergyWindow {
        EnergyWindow::for_bias(bias, self.window_scale)
    }

    pub fn quadrature(&self) -> AdaptiveQuadrature {
        AdaptiveQuadrature {
            absolute_tolerance: self.absolute_tolerance,
            relative_tolerance: self.relative_tolerance,
            maximum_subdivisions: self.maximum_subdivisions,
        }
    }
}
