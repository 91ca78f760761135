//! The material catalog: a fixed mapping from material tag to the
//! physical parameters the lighting shader consumes.

use glam::Vec3;

/// Physical shading parameters for one material tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Stable identifier used by draw-time lookups.
    pub tag: String,
    /// Ambient reflectance color.
    pub ambient_color: Vec3,
    /// Ambient contribution multiplier.
    pub ambient_strength: f32,
    /// Diffuse reflectance color.
    pub diffuse_color: Vec3,
    /// Specular reflectance color.
    pub specular_color: Vec3,
    /// Specular exponent.
    pub shininess: f32,
}

/// Append-only material catalog, populated once at startup and read-only
/// during the frame loop.
///
/// Tags are expected unique; lookup is a linear scan, first match wins,
/// so a duplicate tag deterministically shadows later entries.
#[derive(Debug, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material. A duplicate tag is logged and still appended; the
    /// earlier entry keeps winning lookups.
    pub fn define(&mut self, material: Material) {
        if self.lookup(&material.tag).is_some() {
            log::warn!(
                "material tag {:?} already defined; earlier entry shadows this one",
                material.tag
            );
        }
        self.materials.push(material);
    }

    /// Find the material registered under `tag`.
    ///
    /// Linear scan, first match; an empty catalog short-circuits.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&Material> {
        if self.materials.is_empty() {
            return None;
        }
        self.materials.iter().find(|m| m.tag == tag)
    }

    /// Number of defined materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wood() -> Material {
        Material {
            tag: "wood".into(),
            ambient_color: Vec3::new(0.2, 0.1, 0.05),
            ambient_strength: 0.4,
            diffuse_color: Vec3::new(0.5, 0.25, 0.1),
            specular_color: Vec3::new(0.3, 0.2, 0.1),
            shininess: 8.0,
        }
    }

    #[test]
    fn test_lookup_returns_registered_record() {
        let mut catalog = MaterialCatalog::new();
        catalog.define(wood());
        let found = catalog.lookup("wood");
        assert_eq!(found, Some(&wood()));
    }

    #[test]
    fn test_lookup_miss() {
        let mut catalog = MaterialCatalog::new();
        catalog.define(wood());
        assert!(catalog.lookup("marble").is_none());
    }

    #[test]
    fn test_empty_catalog_short_circuits() {
        let catalog = MaterialCatalog::new();
        assert!(catalog.lookup("wood").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut catalog = MaterialCatalog::new();
        catalog.define(wood());
        let mut shadowed = wood();
        shadowed.shininess = 999.0;
        catalog.define(shadowed);
        assert_eq!(catalog.lookup("wood").map(|m| m.shininess), Some(8.0));
        assert_eq!(catalog.len(), 2);
    }
}
