//! Tube-Mesh entlang eines gesampelten Pfads und Kugel-Endkappen.

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3};

use super::Rgb;

/// Vertex-Layout eines Tube-Meshes (direkt als GPU-Buffer hochladbar).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Dreiecks-Mesh einer Röhre um einen Pfad.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TubeMesh {
    /// Vertices, `(tubular + 1) * (radial + 1)` Stück
    pub vertices: Vec<TubeVertex>,
    /// Dreiecks-Indizes
    pub indices: Vec<u32>,
    /// Farbe des Materials
    pub color: Rgb,
    /// Radius, mit dem das Mesh gebaut wurde
    pub radius: f32,
}

impl TubeMesh {
    /// Leerer Pfad (wird bei `begin()` allokiert, noch ohne Geometrie).
    pub fn empty(color: Rgb) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Baut eine Röhre um `path` (bereits dicht gesampelt, ein Ring pro Punkt).
    ///
    /// Die Rahmen werden per Parallel-Transport mitgeführt, damit die Röhre
    /// bei Wendepunkten nicht verdreht (Frenet-Rahmen kippen dort).
    pub fn from_path(path: &[Vec3], radius: f32, radial_segments: usize, color: Rgb) -> Self {
        if path.len() < 2 {
            return Self::empty(color);
        }
        let radial = radial_segments.max(3);
        let tubular = path.len() - 1;
        let frames = transport_frames(path);

        let mut vertices = Vec::with_capacity(path.len() * (radial + 1));
        for (i, (point, frame)) in path.iter().zip(frames.iter()).enumerate() {
            for j in 0..=radial {
                let v = j as f32 / radial as f32 * std::f32::consts::TAU;
                let normal = (frame.normal * -v.cos() + frame.binormal * v.sin()).normalize_or_zero();
                let position = *point + normal * radius;
                vertices.push(TubeVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                    uv: [i as f32 / tubular as f32, j as f32 / radial as f32],
                });
            }
        }

        let ring = (radial + 1) as u32;
        let mut indices = Vec::with_capacity(tubular * radial * 6);
        for j in 1..=tubular as u32 {
            for i in 1..=radial as u32 {
                let a = ring * (j - 1) + (i - 1);
                let b = ring * j + (i - 1);
                let c = ring * j + i;
                let d = ring * (j - 1) + i;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            vertices,
            indices,
            color,
            radius,
        }
    }

    /// Anzahl der Dreiecke.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Hat das Mesh sichtbare Geometrie?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    normal: Vec3,
    binormal: Vec3,
}

fn transport_frames(path: &[Vec3]) -> Vec<Frame> {
    let n = path.len();
    let mut tangents = Vec::with_capacity(n);
    let mut last_tangent = Vec3::Z;
    for i in 0..n {
        let prev = path[i.saturating_sub(1)];
        let next = path[(i + 1).min(n - 1)];
        let t = (next - prev).normalize_or(last_tangent);
        tangents.push(t);
        last_tangent = t;
    }

    let mut frames = Vec::with_capacity(n);
    let mut normal = tangents[0].any_orthonormal_vector();
    frames.push(Frame {
        normal,
        binormal: tangents[0].cross(normal),
    });
    for i in 1..n {
        let axis = tangents[i - 1].cross(tangents[i]);
        if axis.length_squared() > f32::EPSILON {
            let angle = tangents[i - 1].dot(tangents[i]).clamp(-1.0, 1.0).acos();
            normal = Quat::from_axis_angle(axis.normalize(), angle) * normal;
        }
        frames.push(Frame {
            normal,
            binormal: tangents[i].cross(normal),
        });
    }
    frames
}

/// Kugel-Marker an einem Stroke-Ende.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapMarker {
    pub center: Vec3,
    pub radius: f32,
    pub color: Rgb,
    /// Breiten-/Längensegmente der Kugel
    pub segments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tube_vertex_and_index_counts() {
        let path: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let mesh = TubeMesh::from_path(&path, 0.1, 8, Rgb::WHITE);
        assert_eq!(mesh.vertices.len(), 5 * 9);
        assert_eq!(mesh.triangle_count(), 4 * 8 * 2);
        let max_index = *mesh.indices.iter().max().expect("Indizes vorhanden");
        assert!((max_index as usize) < mesh.vertices.len());
    }

    #[test]
    fn vertices_lie_on_radius() {
        let path = vec![
            Vec3::ZERO,
            Vec3::new(0.5, 0.2, 0.0),
            Vec3::new(1.0, 0.0, 0.3),
        ];
        let mesh = TubeMesh::from_path(&path, 0.02, 8, Rgb::WHITE);
        for (k, v) in mesh.vertices.iter().enumerate() {
            let center = path[k / 9];
            let d = Vec3::from_array(v.position).distance(center);
            assert_relative_eq!(d, 0.02, epsilon = 1e-4);
        }
    }

    #[test]
    fn single_point_yields_empty_mesh() {
        let mesh = TubeMesh::from_path(&[Vec3::ONE], 0.1, 8, Rgb::WHITE);
        assert!(mesh.is_empty());
    }

    #[test]
    fn vertex_layout_is_pod() {
        let mesh = TubeMesh::from_path(&[Vec3::ZERO, Vec3::X], 0.1, 4, Rgb::WHITE);
        let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        assert_eq!(bytes.len(), mesh.vertices.len() * std::mem::size_of::<TubeVertex>());
    }
}
