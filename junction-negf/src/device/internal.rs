use crate::error::ConfigurationError;
use serde::Deserialize;

/// The internal degrees of freedom attached to every lattice site
///
/// Each channel of the internal space carries a charge sign: `+1` for a particle and `-1` for a hole.
/// Block construction and occupations are derived from these signs, so a larger internal space only
/// needs to list its channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "usize")]
pub enum InternalSpace {
    /// A single spinless particle channel
    Scalar,
    /// A particle-hole (Bogoliubov-de Gennes) spinor
    NambuSpinor,
}

impl InternalSpace {
    /// The number of internal channels per site
    pub fn dimension(&self) -> usize {
        self.charges().len()
    }

    /// The charge sign of each internal channel
    pub fn charges(&self) -> &'static [f64] {
        match self {
            InternalSpace::Scalar => &[1.],
            InternalSpace::NambuSpinor => &[1., -1.],
        }
    }

    /// The (particle, hole) channel pair coupled by the superconducting pairing amplitude, if any
    pub fn pairing_channels(&self) -> Option<(usize, usize)> {
        match self {
            InternalSpace::Scalar => None,
            InternalSpace::NambuSpinor => Some((0, 1)),
        }
    }

    /// The channel used when a single representative current component is requested
    pub fn particle_channel(&self) -> usize {
        0
    }
}

impl TryFrom<usize> for InternalSpace {
    type Error = ConfigurationError;

    fn try_from(dimension: usize) -> Result<Self, Self::Error> {
        match dimension {
            1 => Ok(InternalSpace::Scalar),
            2 => Ok(InternalSpace::NambuSpinor),
            _ => Err(ConfigurationError::UnsupportedInternalSpace(dimension)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::InternalSpace;
    use crate::error::ConfigurationError;

    #[test]
    fn internal_space_is_constructed_from_its_dimension() {
        assert_eq!(InternalSpace::try_from(1), Ok(InternalSpace::Scalar));
        assert_eq!(InternalSpace::try_from(2), Ok(InternalSpace::NambuSpinor));
        assert_eq!(InternalSpace::NambuSpinor.dimension(), 2);
        assert_eq!(InternalSpace::Scalar.dimension(), 1);
    }

    #[test]
    fn unsupported_dimensions_are_configuration_errors() {
        for dimension in [0, 3, 4] {
            assert_eq!(
                InternalSpace::try_from(dimension),
                Err(ConfigurationError::UnsupportedInternalSpace(dimension))
            );
        }
    }

    #[test]
    fn nambu_channels_carry_opposite_charge() {
        let charges = InternalSpace::NambuSpinor.charges();
        assert_eq!(charges[0], -charges[1]);
        assert_eq!(InternalSpace::Scalar.pairing_channels(), None);
    }
}
