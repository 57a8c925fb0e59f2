/// Geometry primitives for the mesh viewer
use nalgebra::Point3;

/// A polygonal face referencing vertices by 0-based index.
///
/// Faces keep whatever vertex count the source file gave them; entries of
/// length 1 or 2 are legal and render as degenerate polygons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

/// A 3D mesh: a vertex list plus faces indexing into it.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// True when the mesh holds no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop all vertices and faces so the instance can be repopulated.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }

    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) {
        self.vertices.push(Point3::new(x, y, z));
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Axis-aligned bounding box over all vertices, or `None` when empty.
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices[1..] {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        Some((min, max))
    }

    /// Largest bounding-box dimension, used to normalize the screen scale.
    ///
    /// An empty mesh reports 1.0 so the scale computation never divides by
    /// zero.
    pub fn extent(&self) -> f32 {
        match self.bounds() {
            Some((min, max)) => {
                let size = max - min;
                size.x.max(size.y).max(size.z)
            }
            None => 1.0,
        }
    }

    /// Create an axis-aligned cube with quad faces, for tests and demos.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::new();

        for &z in &[-half, half] {
            mesh.add_vertex(-half, -half, z);
            mesh.add_vertex(half, -half, z);
            mesh.add_vertex(half, half, z);
            mesh.add_vertex(-half, half, z);
        }

        // Back, front, then the four side quads
        mesh.add_face(Face::new(vec![0, 1, 2, 3]));
        mesh.add_face(Face::new(vec![4, 5, 6, 7]));
        mesh.add_face(Face::new(vec![0, 1, 5, 4]));
        mesh.add_face(Face::new(vec![1, 2, 6, 5]));
        mesh.add_face(Face::new(vec![2, 3, 7, 6]));
        mesh.add_face(Face::new(vec![3, 0, 4, 7]));

        mesh
    }
}
