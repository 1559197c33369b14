use crate::{Axis, Lattice, Neighbour, SiteConnectivity};
use itertools::iproduct;
use nalgebra::Point3;

/// Create a lattice with `lateral × lateral` sites in each of `longitudinal` layers
///
/// A zero in either dimension produces an empty lattice rather than an error.
pub fn create_cubic_lattice(lateral: usize, longitudinal: usize) -> Lattice {
    if lateral == 0 || longitudinal == 0 {
        return Lattice::from_sites_and_connectivity(lateral, longitudinal, Vec::new(), Vec::new());
    }

    let sites: Vec<Point3<usize>> = iproduct!(0..lateral, 0..lateral, 0..longitudinal)
        .map(|(x, y, z)| Point3::new(x, y, z))
        .collect();

    let to_global_site_index = |x: usize, y: usize, z: usize| (x * lateral + y) * longitudinal + z;

    let connectivity = sites
        .iter()
        .map(|site| {
            let mut neighbours = Vec::with_capacity(6);
            let mut push = |x, y, z, axis| {
                neighbours.push(Neighbour {
                    index: to_global_site_index(x, y, z),
                    axis,
                })
            };
            if site.x > 0 {
                push(site.x - 1, site.y, site.z, Axis::X);
            }
            if site.x + 1 < lateral {
                push(site.x + 1, site.y, site.z, Axis::X);
            }
            if site.y > 0 {
                push(site.x, site.y - 1, site.z, Axis::Y);
            }
            if site.y + 1 < lateral {
                push(site.x, site.y + 1, site.z, Axis::Y);
            }
            if site.z > 0 {
                push(site.x, site.y, site.z - 1, Axis::Z);
            }
            if site.z + 1 < longitudinal {
                push(site.x, site.y, site.z + 1, Axis::Z);
            }
            if site.z == 0 || site.z + 1 == longitudinal {
                SiteConnectivity::Boundary(neighbours)
            } else {
                SiteConnectivity::Core(neighbours)
            }
        })
        .collect();

    Lattice::from_sites_and_connectivity(lateral, longitudinal, sites, connectivity)
}

/// Create a strictly one-dimensional chain of `longitudinal` sites
pub fn create_chain(longitudinal: usize) -> Lattice {
    create_cubic_lattice(1, longitudinal)
}

#[cfg(test)]
mod test {
    use super::{create_chain, create_cubic_lattice};
    use crate::Connectivity;

    #[test]
    fn degenerate_dimensions_produce_an_empty_lattice() {
        assert!(create_cubic_lattice(0, 4).is_empty());
        assert!(create_cubic_lattice(3, 0).is_empty());
    }

    #[test]
    fn enumeration_runs_z_fastest() {
        let lattice = create_cubic_lattice(2, 3);
        let coordinates = lattice
            .sites()
            .iter()
            .map(|site| (site.x, site.y, site.z))
            .collect::<Vec<_>>();
        assert_eq!(
            &coordinates[..4],
            &[(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 1, 0)]
        );
        assert_eq!(coordinates.last(), Some(&(1, 1, 2)));
    }

    #[test]
    fn chain_sites_couple_only_to_adjacent_layers() {
        let chain = create_chain(5);
        let connectivity = chain.connectivity();
        assert_eq!(connectivity[0].neighbour_indices(), vec![1]);
        assert_eq!(connectivity[2].neighbour_indices(), vec![1, 3]);
        assert_eq!(connectivity[4].neighbour_indices(), vec![3]);
        assert!(connectivity[0].is_boundary());
        assert!(!connectivity[2].is_boundary());
    }

    #[test]
    fn generated_connectivity_matches_the_pairwise_unit_offset_rule() {
        let lattice = create_cubic_lattice(3, 3);
        for (i, connectivity) in lattice.connectivity().iter().enumerate() {
            let mut listed = connectivity.neighbour_indices();
            listed.sort_unstable();
            let expected = (0..lattice.num_sites())
                .filter(|&j| lattice.is_nearest_neighbour(i, j))
                .collect::<Vec<_>>();
            assert_eq!(listed, expected);
        }
    }
}
