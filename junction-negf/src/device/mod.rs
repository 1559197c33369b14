// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Describes the junction: the lattice it lives on, the internal degrees of freedom carried by each
//! site and the physical parameters of the channel and the two superconducting leads

/// Lattice dimensions and their validation
mod dimensions;
/// The internal space (scalar or Nambu) attached to each lattice site
mod internal;
/// Physical parameters of the channel and leads
mod physics;

pub use dimensions::LatticeDimensions;
pub use internal::InternalSpace;
pub use physics::{Lead, PhysicalParameters, PhysicsConfig};
