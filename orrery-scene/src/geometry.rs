use glam::Vec3;
use std::f32::consts::TAU;

/// Immutable vertex data for one node, ready for a renderer to upload.
///
/// Buffers are flat, matching what WebGL consumes directly: `positions` are
/// xyz triples, `colors` rgba quads, `normals` xyz triples (one per vertex),
/// `indices` u16 triangle lists. Produced once at scene construction and
/// never mutated afterward.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u16>,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// The hello-world triangle: three vertices, one color each.
pub fn triangle() -> Geometry {
    let positions = vec![0.0, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0];
    let colors = vec![
        0.0, 0.0, 1.0, 1.0, //
        1.0, 0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 1.0,
    ];
    // Flat triangle facing +Z
    let normals = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let indices = vec![0, 1, 2];

    Geometry {
        positions,
        colors,
        normals,
        indices,
    }
}

/// A filled disc in the XY plane: center vertex plus `segments + 1` rim
/// vertices (the first rim vertex is repeated to close the fan), triangulated
/// as a fan around the center.
pub fn circle(segments: u16, radius: f32, color: [f32; 4]) -> Geometry {
    // A fan needs at least 3 segments; the top end is bounded by u16 indices
    let segments = segments.max(3);
    debug_assert!(
        segments <= u16::MAX - 2,
        "vertex count exceeds u16 index range"
    );

    let mut positions = vec![0.0, 0.0, 0.0];

    for i in 0..=segments {
        let theta = i as f32 * TAU / segments as f32;
        positions.push(radius * theta.sin());
        positions.push(radius * theta.cos());
        positions.push(0.0);
    }

    let vertex_count = positions.len() / 3;
    let mut colors = Vec::with_capacity(vertex_count * 4);
    let mut normals = Vec::with_capacity(vertex_count * 3);
    for _ in 0..vertex_count {
        colors.extend_from_slice(&color);
        normals.extend_from_slice(&[0.0, 0.0, 1.0]);
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    Geometry {
        positions,
        colors,
        normals,
        indices,
    }
}

/// An axis-aligned unit cube centered at the origin, four vertices per face
/// so every face carries a flat color and a flat normal.
pub fn cube(face_colors: [[f32; 4]; 6]) -> Geometry {
    // Face corners in CCW order viewed from outside, one row per face:
    // front, back, top, bottom, right, left.
    #[rustfmt::skip]
    const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0,  1.0], [[-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5]]),
        ([0.0, 0.0, -1.0], [[ 0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5]]),
        ([0.0, 1.0,  0.0], [[-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5]]),
        ([0.0, -1.0, 0.0], [[-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5]]),
        ([1.0, 0.0,  0.0], [[ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5]]),
        ([-1.0, 0.0, 0.0], [[-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5]]),
    ];

    let mut positions = Vec::with_capacity(24 * 3);
    let mut colors = Vec::with_capacity(24 * 4);
    let mut normals = Vec::with_capacity(24 * 3);
    let mut indices = Vec::with_capacity(36);

    for (face, (normal, corners)) in FACES.iter().enumerate() {
        let base = (face * 4) as u16;
        for corner in corners {
            positions.extend_from_slice(corner);
            normals.extend_from_slice(normal);
            colors.extend_from_slice(&face_colors[face]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Geometry {
        positions,
        colors,
        normals,
        indices,
    }
}

/// A square-based pyramid: base corners at y = -1, apex at (0, 1.5, 0).
///
/// Vertices are unshared (three per triangle) so each face gets its own flat
/// normal from [`face_normals`].
pub fn pyramid(face_color: [f32; 4]) -> Geometry {
    #[rustfmt::skip]
    let corners: [[f32; 3]; 5] = [
        [-1.0, -1.0, -1.0],
        [ 1.0, -1.0, -1.0],
        [ 1.0, -1.0,  1.0],
        [-1.0, -1.0,  1.0],
        [ 0.0,  1.5,  0.0],
    ];

    // Two base triangles plus four sides, wound CCW from outside
    #[rustfmt::skip]
    let tris: [[usize; 3]; 6] = [
        [0, 1, 2], [0, 2, 3],
        [1, 0, 4], [2, 1, 4],
        [3, 2, 4], [0, 3, 4],
    ];

    let mut positions = Vec::with_capacity(tris.len() * 9);
    let mut indices = Vec::with_capacity(tris.len() * 3);
    for (t, tri) in tris.iter().enumerate() {
        for &v in tri {
            positions.extend_from_slice(&corners[v]);
        }
        let base = (t * 3) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    let per_face = face_normals(&positions, &indices);
    let mut normals = Vec::with_capacity(positions.len());
    for face in per_face.chunks_exact(3) {
        for _ in 0..3 {
            normals.extend_from_slice(face);
        }
    }

    let vertex_count = positions.len() / 3;
    let mut colors = Vec::with_capacity(vertex_count * 4);
    for _ in 0..vertex_count {
        colors.extend_from_slice(&face_color);
    }

    Geometry {
        positions,
        colors,
        normals,
        indices,
    }
}

/// A unit-direction latitude/longitude sphere: `stacks` rows from pole to
/// pole, `slices` columns around the equator.
pub fn uv_sphere(stacks: u16, slices: u16, radius: f32, color: [f32; 4]) -> Geometry {
    use std::f32::consts::PI;

    // Degenerate grids divide by zero; the vertex count must stay
    // addressable by u16 indices
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    debug_assert!(
        (stacks as u32 + 1) * (slices as u32 + 1) <= u16::MAX as u32 + 1,
        "vertex count exceeds u16 index range"
    );

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut colors = Vec::new();

    for i in 0..=stacks {
        let phi = i as f32 * PI / stacks as f32;
        for j in 0..=slices {
            let theta = j as f32 * TAU / slices as f32;
            let dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            positions.extend_from_slice(&[radius * dir.x, radius * dir.y, radius * dir.z]);
            normals.extend_from_slice(&[dir.x, dir.y, dir.z]);
            colors.extend_from_slice(&color);
        }
    }

    let row = slices + 1;
    let mut indices = Vec::with_capacity(stacks as usize * slices as usize * 6);
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * row + j;
            let b = a + row;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Geometry {
        positions,
        colors,
        normals,
        indices,
    }
}

/// One unit normal per triangle, computed from the cross product of the
/// triangle's edges. Returns xyz triples, `indices.len() / 3` of them.
pub fn face_normals(positions: &[f32], indices: &[u16]) -> Vec<f32> {
    let vertex = |i: u16| {
        let i = i as usize * 3;
        Vec3::new(positions[i], positions[i + 1], positions[i + 2])
    };

    let mut normals = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        let p1 = vertex(tri[0]);
        let p2 = vertex(tri[1]);
        let p3 = vertex(tri[2]);
        let n = (p2 - p1).cross(p3 - p1).normalize_or_zero();
        normals.extend_from_slice(&[n.x, n.y, n.z]);
    }
    normals
}
