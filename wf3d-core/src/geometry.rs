/// Geometry primitives for wireframe rendering
use nalgebra::{DMatrix, Point3};

/// A mesh vertex as read from the input file
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub label: String,
    pub position: Point3<f64>,
}

impl Vertex {
    pub fn new(label: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            label: label.into(),
            position: Point3::new(x, y, z),
        }
    }

    /// The vertex as a 3×1 column vector, ready for matrix multiplication
    pub fn column(&self) -> DMatrix<f64> {
        DMatrix::from_column_slice(3, 1, &[self.position.x, self.position.y, self.position.z])
    }
}

/// A closed polygon given by 0-based vertex indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Edges of the polygon: consecutive pairs, then the closing pair from
    /// the last index back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |k| (self.indices[k], self.indices[(k + 1) % n]))
    }
}

/// A wireframe mesh: vertices plus the faces that connect them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total number of edge segments drawn per frame
    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(Face::len).sum()
    }

    /// Create a cube with integral corners at `±half`
    pub fn cube(half: f64) -> Self {
        let mut mesh = Self::with_capacity(8, 6);
        let corners = [
            (-half, -half, -half),
            (half, -half, -half),
            (half, half, -half),
            (-half, half, -half),
            (-half, -half, half),
            (half, -half, half),
            (half, half, half),
            (-half, half, half),
        ];
        for (i, (x, y, z)) in corners.into_iter().enumerate() {
            mesh.add_vertex(Vertex::new(format!("v{}", i + 1), x, y, z));
        }

        // Back, front, bottom, top, left, right
        for indices in [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [3, 2, 6, 7],
            [0, 3, 7, 4],
            [1, 2, 6, 5],
        ] {
            mesh.add_face(Face::new(indices.to_vec()));
        }

        mesh
    }
}
