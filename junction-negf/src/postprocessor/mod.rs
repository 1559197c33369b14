// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Postprocessor
//!
//! Observables extracted from the correlation function. The energy resolved current is evaluated on the bond
//! between the first layer of the device, which touches the source lead, and the layer after it.

mod current;

pub(crate) use current::inter_layer_current;
pub use current::{CurrentChannel, EnergyResolvedCurrent};
