use crate::{unit_offset_axis, Axis, Connectivity, SiteConnectivity};
use nalgebra::Point3;

/// A square-cross-section tight-binding lattice
///
/// Sites are stored in enumeration order: `x` outermost, then `y`, with the longitudinal coordinate `z`
/// varying fastest. Every matrix assembled over the lattice inherits this ordering.
#[derive(Clone, Debug)]
pub struct Lattice {
    lateral: usize,
    longitudinal: usize,
    sites: Vec<Point3<usize>>,
    connectivity: Vec<SiteConnectivity>,
}

impl Lattice {
    pub fn from_sites_and_connectivity(
        lateral: usize,
        longitudinal: usize,
        sites: Vec<Point3<usize>>,
        connectivity: Vec<SiteConnectivity>,
    ) -> Self {
        debug_assert_eq!(sites.len(), connectivity.len());
        Self {
            lateral,
            longitudinal,
            sites,
            connectivity,
        }
    }

    /// A `lateral × lateral × longitudinal` simple cubic lattice, see `create_cubic_lattice`
    pub fn cubic(lateral: usize, longitudinal: usize) -> Self {
        crate::create_cubic_lattice(lateral, longitudinal)
    }

    /// Number of sites along each lateral axis
    pub fn lateral(&self) -> usize {
        self.lateral
    }

    /// Number of layers along the transport axis
    pub fn longitudinal(&self) -> usize {
        self.longitudinal
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// The number of sites in a single layer of constant `z`
    pub fn sites_per_layer(&self) -> usize {
        self.lateral * self.lateral
    }

    pub fn sites(&self) -> &[Point3<usize>] {
        &self.sites
    }

    pub fn connectivity(&self) -> Vec<&SiteConnectivity> {
        self.connectivity.iter().collect()
    }

    /// The enumeration index of the site at `(x, y, z)`
    pub fn site_index(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.lateral + y) * self.longitudinal + z
    }

    /// Indices of every site in layer `z`, in lateral enumeration order
    ///
    /// Because `z` varies fastest the layer is not contiguous in the enumeration for a lateral size above one.
    /// A layer outside the lattice holds no sites.
    pub fn sites_in_layer(&self, z: usize) -> Vec<usize> {
        if z >= self.longitudinal {
            return Vec::new();
        }
        (0..self.lateral)
            .flat_map(|x| (0..self.lateral).map(move |y| (x, y)))
            .map(|(x, y)| self.site_index(x, y, z))
            .collect()
    }

    /// Nearest-neighbour test on the enumeration indices of two sites
    pub fn bond_axis(&self, i: usize, j: usize) -> Option<Axis> {
        unit_offset_axis(&self.sites[i], &self.sites[j])
    }

    pub fn is_nearest_neighbour(&self, i: usize, j: usize) -> bool {
        self.bond_axis(i, j).is_some()
    }

    /// Indices of the sites which sit in a terminating layer of the chain
    pub fn boundary_sites(&self) -> Vec<usize> {
        self.connectivity
            .iter()
            .enumerate()
            .filter_map(|(index, connectivity)| connectivity.is_boundary().then(|| index))
            .collect()
    }
}
