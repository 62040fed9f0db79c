use crate::error::{EstimateError, EstimateResult};
use log::trace;

/// horizontal layout of a mesh: nominal spacing and number of grid columns
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshConfig {
    pub spacing_km: f64,
    pub grid_columns: u64,
}

impl MeshConfig {
    const fn new(spacing_km: f64, grid_columns: u64) -> Self {
        Self {
            spacing_km,
            grid_columns,
        }
    }
}

/* # presets */

// quasi-uniform meshes, followed by refined meshes keyed by coarse-fine spacing;
// refined meshes record their finest spacing
static MESHES: &[(&str, MeshConfig)] = &[
    ("480km", MeshConfig::new(480.0, 2_562)),
    ("240km", MeshConfig::new(240.0, 10_242)),
    ("120km", MeshConfig::new(120.0, 40_962)),
    ("60km", MeshConfig::new(60.0, 163_842)),
    ("30km", MeshConfig::new(30.0, 655_362)),
    ("15km", MeshConfig::new(15.0, 2_621_442)),
    ("10km", MeshConfig::new(10.0, 5_898_242)),
    ("7.5km", MeshConfig::new(7.5, 10_485_762)),
    ("3.75km", MeshConfig::new(3.75, 41_943_042)),
    ("3km", MeshConfig::new(3.0, 65_536_002)),
    ("60-3km", MeshConfig::new(3.0, 835_586)),
    ("15-3km", MeshConfig::new(3.0, 6_488_066)),
];

/// find the mesh stored under `key`
pub fn lookup(key: &str) -> EstimateResult<MeshConfig> {
    trace!("looking up mesh {}", key);
    MESHES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, config)| *config)
        .ok_or_else(|| EstimateError::UnknownMeshKey(key.to_string()))
}

/// every mesh key, in table order
pub fn keys() -> impl Iterator<Item = &'static str> {
    MESHES.iter().map(|(name, _)| *name)
}

pub fn presets() -> &'static [(&'static str, MeshConfig)] {
    MESHES
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup_known() {
        assert_eq!(
            lookup("3.75km"),
            Ok(MeshConfig {
                spacing_km: 3.75,
                grid_columns: 41_943_042
            })
        );
        assert_eq!(lookup("3km").map(|mesh| mesh.grid_columns), Ok(65_536_002));
    }

    #[test]
    fn lookup_unknown() {
        assert_eq!(
            lookup("2km"),
            Err(EstimateError::UnknownMeshKey("2km".to_string()))
        );
        assert!(lookup("").is_err());
    }

    #[test]
    fn keys_unique() {
        let mut names = keys().collect::<Vec<&str>>();
        let len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len);
        assert_eq!(len, presets().len());
    }

    #[test]
    fn presets_positive() {
        for (_, mesh) in presets() {
            assert!(mesh.spacing_km > 0.0);
            assert!(mesh.grid_columns > 0);
        }
    }
}
