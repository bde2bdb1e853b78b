/// Orthographic projection of mesh vertices to window coordinates
use nalgebra::{DMatrix, Point2};

use crate::geometry::{Mesh, Vertex};
use crate::matrix::multiply;
use crate::transform::{RotationState, Transform};

/// A point in window pixel coordinates
pub type ScreenPoint = Point2<f64>;

/// Fixed projection parameters: figure scale and square window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub window_size: f64,
}

/// Rotation and projection matrices for a single frame
struct FrameMatrices {
    rx: DMatrix<f64>,
    ry: DMatrix<f64>,
    rz: DMatrix<f64>,
    ortho: DMatrix<f64>,
}

impl FrameMatrices {
    fn new(rotation: &RotationState) -> Self {
        Self {
            rx: Transform::rotation_x(rotation.x),
            ry: Transform::rotation_y(rotation.y),
            rz: Transform::rotation_z(rotation.z),
            ortho: Transform::orthographic(),
        }
    }
}

impl Projection {
    pub fn new(scale: f64, window_size: f64) -> Self {
        Self { scale, window_size }
    }

    /// Project one vertex under the given rotation
    pub fn project(&self, vertex: &Vertex, rotation: &RotationState) -> ScreenPoint {
        self.project_with(&FrameMatrices::new(rotation), vertex)
    }

    /// Project every vertex of the mesh, in vertex order
    pub fn project_all(&self, mesh: &Mesh, rotation: &RotationState) -> Vec<ScreenPoint> {
        let matrices = FrameMatrices::new(rotation);
        mesh.vertices
            .iter()
            .map(|vertex| self.project_with(&matrices, vertex))
            .collect()
    }

    fn project_with(&self, m: &FrameMatrices, vertex: &Vertex) -> ScreenPoint {
        // Rz · (Ry · (Rx · v)), then drop z
        let rotated = multiply(&m.rz, &multiply(&m.ry, &multiply(&m.rx, &vertex.column())));
        let flat = multiply(&m.ortho, &rotated);

        let half = self.window_size / 2.0;
        ScreenPoint::new(
            flat[(0, 0)] * self.scale + half,
            flat[(1, 0)] * self.scale + half,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(100.0, 600.0)
    }
}
