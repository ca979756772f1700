//! Zeichenzonen: achsenparallele Containment-Tests im Weltraum.

use glam::{Affine3A, EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::shared::options::AreaOptions;

/// Achsenparalleler Quader in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl Aabb {
    /// Leerer Quader (min = +∞, max = -∞), wächst per `extend`.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Erweitert den Quader um einen Punkt.
    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Inklusiver Containment-Test (Punkte auf dem Rand zählen als innen).
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Authored Geometrie einer Zeichenzone (lokale Ausdehnung, zentriert).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VolumeShape {
    /// Ebene in der lokalen XY-Ebene (Breite × Höhe, Dicke 0)
    Plane { width: f32, height: f32 },
    /// Quader mit voller Kantenlänge je Achse
    Box { size: Vec3 },
}

impl VolumeShape {
    fn half_extents(&self) -> Vec3 {
        match *self {
            VolumeShape::Plane { width, height } => Vec3::new(width, height, 0.0) * 0.5,
            VolumeShape::Box { size } => size * 0.5,
        }
    }
}

/// Lokale Transformation einer Zone (Rotation als XYZ-Euler in Grad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeTransform {
    pub translation: Vec3,
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl Default for VolumeTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_deg: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl VolumeTransform {
    /// Baut die affine Welt-Transformation.
    pub fn to_affine(&self) -> Affine3A {
        let r = self.rotation_deg;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        Affine3A::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

/// Eine Zeichenzone. Innen = Zeichnen und Pickers erlaubt.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingVolume {
    /// Authored Geometrie; `None` solange der Host sie noch nicht geladen hat
    pub shape: Option<VolumeShape>,
    /// Aktuelle Transformation (kann sich zwischen Frames ändern)
    pub transform: VolumeTransform,
}

impl DrawingVolume {
    /// Erstellt eine Zone aus Geometrie und Transformation.
    pub fn new(shape: VolumeShape, transform: VolumeTransform) -> Self {
        Self {
            shape: Some(shape),
            transform,
        }
    }

    /// Achsenparalleler Quader um `center` mit Kantenlänge `size`.
    pub fn axis_box(center: Vec3, size: Vec3) -> Self {
        Self::new(
            VolumeShape::Box { size },
            VolumeTransform {
                translation: center,
                ..Default::default()
            },
        )
    }

    /// Default-Zone aus den Optionen (ebene Fläche am Boden).
    pub fn default_area(area: &AreaOptions) -> Self {
        let width = if area.size[0].is_finite() { area.size[0] } else { 4.0 };
        let height = if area.size[1].is_finite() { area.size[1] } else { 4.0 };
        Self::new(
            VolumeShape::Plane { width, height },
            VolumeTransform {
                translation: Vec3::from(area.position),
                rotation_deg: Vec3::from(area.rotation_deg),
                scale: Vec3::ONE,
            },
        )
    }

    /// Welt-AABB aus den acht transformierten Ecken, bei jedem Aufruf neu berechnet.
    pub fn world_bounds(&self) -> Option<Aabb> {
        let half = self.shape?.half_extents();
        let affine = self.transform.to_affine();
        let mut bounds = Aabb::EMPTY;
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            );
            bounds.extend(affine.transform_point3(corner));
        }
        Some(bounds)
    }

    /// Liegt der Punkt in der Zone? Fehlende Geometrie → immer `false`.
    pub fn contains(&self, point: Vec3) -> bool {
        self.world_bounds().is_some_and(|b| b.contains(point))
    }
}

/// Ist der Punkt in mindestens einer Zone?
pub fn inside_any(volumes: &[DrawingVolume], point: Vec3) -> bool {
    volumes.iter().any(|v| v.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_contains_center_and_boundary() {
        let vol = DrawingVolume::axis_box(Vec3::new(0.0, 0.0, -4.0), Vec3::new(4.0, 4.0, 4.0));
        assert!(vol.contains(Vec3::new(0.0, 0.0, -4.0)));
        assert!(vol.contains(Vec3::new(2.0, 0.0, -4.0)));
        assert!(!vol.contains(Vec3::new(2.01, 0.0, -4.0)));
    }

    #[test]
    fn default_area_is_flat_floor_plane() {
        let vol = DrawingVolume::default_area(&AreaOptions::default());
        let bounds = vol.world_bounds().expect("Geometrie vorhanden");
        assert_relative_eq!(bounds.min.x, -2.0, epsilon = 1e-5);
        assert_relative_eq!(bounds.max.z, -2.0, epsilon = 1e-5);
        assert_relative_eq!(bounds.min.z, -6.0, epsilon = 1e-5);
        assert!(bounds.max.y - bounds.min.y < 1e-5);

        assert!(vol.contains(Vec3::new(0.0, 0.0, -4.0)));
        assert!(!vol.contains(Vec3::new(0.0, 0.5, -4.0)));
    }

    #[test]
    fn missing_geometry_never_contains() {
        let vol = DrawingVolume {
            shape: None,
            transform: VolumeTransform::default(),
        };
        assert!(!vol.contains(Vec3::ZERO));
        assert!(vol.world_bounds().is_none());
    }

    #[test]
    fn bounds_follow_transform_changes() {
        let mut vol = DrawingVolume::axis_box(Vec3::ZERO, Vec3::splat(2.0));
        assert!(vol.contains(Vec3::ZERO));
        vol.transform.translation = Vec3::new(10.0, 0.0, 0.0);
        assert!(!vol.contains(Vec3::ZERO));
        assert!(vol.contains(Vec3::new(10.5, 0.0, 0.0)));
    }

    #[test]
    fn rotated_box_grows_aabb() {
        let vol = DrawingVolume::new(
            VolumeShape::Box {
                size: Vec3::new(2.0, 2.0, 2.0),
            },
            VolumeTransform {
                rotation_deg: Vec3::new(0.0, 45.0, 0.0),
                ..Default::default()
            },
        );
        // Diagonale des gedrehten Quaders: sqrt(2) statt 1
        assert!(vol.contains(Vec3::new(1.3, 0.0, 0.0)));
    }

    #[test]
    fn inside_any_is_disjunction() {
        let vols = vec![
            DrawingVolume::axis_box(Vec3::ZERO, Vec3::ONE),
            DrawingVolume::axis_box(Vec3::new(5.0, 0.0, 0.0), Vec3::ONE),
        ];
        assert!(inside_any(&vols, Vec3::new(5.2, 0.0, 0.0)));
        assert!(!inside_any(&vols, Vec3::new(2.5, 0.0, 0.0)));
        assert!(!inside_any(&[], Vec3::ZERO));
    }
}
