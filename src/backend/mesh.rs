//! The primitive-shape interface of the mesh backend.
//!
//! The backend owns the vertex buffers; the core (and the scene traversal
//! driving it) only ever asks for a shape by name. Each shape has a
//! load-once step and a draw step.

/// The fixed catalog of primitive shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Flat quad in the XZ plane.
    Plane,
    /// Unit cube.
    Box,
    /// Straight cylinder.
    Cylinder,
    /// Cylinder with different top and bottom radii.
    TaperedCylinder,
    /// Full sphere.
    Sphere,
    /// Upper half of a sphere.
    HalfSphere,
    /// Full torus.
    Torus,
    /// Half torus (for handles and arcs).
    HalfTorus,
}

/// Selects which caps/ends of a shape to render.
///
/// Only the cylinder variants consult these; the other shapes ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawFlags {
    /// Render the top cap.
    pub top: bool,
    /// Render the bottom cap.
    pub bottom: bool,
    /// Render the side surface.
    pub sides: bool,
}

impl Default for DrawFlags {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            sides: true,
        }
    }
}

/// Owns the primitive vertex buffers and issues draw calls for them.
pub trait MeshBackend {
    /// Load a shape's vertex data once; later loads of the same shape are
    /// no-ops.
    fn load(&mut self, shape: Shape);
    /// Draw a previously loaded shape with the current shader state.
    fn draw(&mut self, shape: Shape, flags: DrawFlags);
}

#[cfg(test)]
pub(crate) mod fake {
    //! A mesh backend that records load and draw calls.

    use super::{DrawFlags, MeshBackend, Shape};

    #[derive(Debug, Default)]
    pub struct FakeMeshes {
        pub loads: Vec<Shape>,
        pub draws: Vec<(Shape, DrawFlags)>,
    }

    impl MeshBackend for FakeMeshes {
        fn load(&mut self, shape: Shape) {
            self.loads.push(shape);
        }

        fn draw(&mut self, shape: Shape, flags: DrawFlags) {
            self.draws.push((shape, flags));
        }
    }
}
