use nalgebra::Point3;

/// The Cartesian axis along which two nearest-neighbour sites are displaced
///
/// The `Z` axis is the transport (longitudinal) direction, `X` and `Y` span the lateral cross-section
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A single bond leaving a site
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbour {
    /// Enumeration index of the site at the far end of the bond
    pub index: usize,
    /// Axis along which the bond is oriented
    pub axis: Axis,
}

#[derive(Clone, Debug)]
pub enum SiteConnectivity {
    /// A site strictly inside the chain, coupled in both longitudinal directions
    Core(Vec<Neighbour>),
    /// A site in the first or last layer of the chain, which is where a lead attaches
    Boundary(Vec<Neighbour>),
}

pub trait Connectivity {
    fn as_inner(&self) -> &[Neighbour];

    fn is_boundary(&self) -> bool;

    fn neighbour_indices(&self) -> Vec<usize> {
        self.as_inner().iter().map(|neighbour| neighbour.index).collect()
    }
}

impl Connectivity for SiteConnectivity {
    fn as_inner(&self) -> &[Neighbour] {
        match self {
            SiteConnectivity::Core(x) => x,
            SiteConnectivity::Boundary(x) => x,
        }
    }

    fn is_boundary(&self) -> bool {
        matches!(self, SiteConnectivity::Boundary(_))
    }
}

/// Returns the axis joining `a` and `b` if their Manhattan offset is a unit vector along exactly one axis
pub fn unit_offset_axis(a: &Point3<usize>, b: &Point3<usize>) -> Option<Axis> {
    let offsets = [
        (a.x.abs_diff(b.x), Axis::X),
        (a.y.abs_diff(b.y), Axis::Y),
        (a.z.abs_diff(b.z), Axis::Z),
    ];
    let manhattan: usize = offsets.iter().map(|(offset, _)| offset).sum();
    if manhattan != 1 {
        return None;
    }
    offsets
        .into_iter()
        .find(|(offset, _)| *offset == 1)
        .map(|(_, axis)| axis)
}
