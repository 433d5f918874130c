use log::warn;

use super::{shape::LocalHit, triangle::Triangle};
use crate::{
    error::SceneError,
    math::{normal::Normal, point::Point, point2::Point2},
    render::ray::Ray,
    scene::object::bounding_box::BoundingBox,
};

/// Indexed triangle mesh. Positions, and optionally normals and uvs, are stored
/// per vertex and shared by the faces that reference them.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    positions: Vec<Point>,
    normals: Option<Vec<Normal>>,
    uvs: Option<Vec<Point2>>,
    faces: Vec<[usize; 3]>,
    triangles: Vec<Triangle>,
    bounding_box: BoundingBox,
}

impl TriangleMesh {
    pub fn new(positions: Vec<Point>, faces: Vec<[usize; 3]>) -> Result<Self, SceneError> {
        Self::from_parts(positions, None, None, faces)
    }

    /// Validates every face index and vertex attribute count before building the mesh.
    pub fn from_parts(
        positions: Vec<Point>,
        normals: Option<Vec<Normal>>,
        uvs: Option<Vec<Point2>>,
        faces: Vec<[usize; 3]>,
    ) -> Result<Self, SceneError> {
        if faces.is_empty() {
            return Err(SceneError::EmptyMesh);
        }
        let vertex_count = positions.len();
        if let Some(normals) = &normals {
            Self::check_attribute_count("normals", vertex_count, normals.len())?;
        }
        if let Some(uvs) = &uvs {
            Self::check_attribute_count("uvs", vertex_count, uvs.len())?;
        }

        let triangles = faces
            .iter()
            .enumerate()
            .map(|(face, &indices)| {
                if let Some(&index) = indices.iter().find(|&&index| index >= vertex_count) {
                    return Err(SceneError::InvalidVertexIndex {
                        face,
                        index,
                        vertex_count,
                    });
                }
                let [a, b, c] = indices;
                let mut triangle = Triangle::new(positions[a], positions[b], positions[c])
                    .inspect_err(|_| warn!("mesh face {face} is degenerate"))?;
                if let Some(normals) = &normals {
                    triangle = triangle.with_vertex_normals([normals[a], normals[b], normals[c]]);
                }
                if let Some(uvs) = &uvs {
                    triangle = triangle.with_uvs([uvs[a], uvs[b], uvs[c]]);
                }
                Ok(triangle)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let bounding_box = triangles
            .iter()
            .fold(BoundingBox::empty(), |acc, t| acc.union(&t.bounding_box()));

        Ok(Self {
            positions,
            normals,
            uvs,
            faces,
            triangles,
            bounding_box,
        })
    }

    fn check_attribute_count(
        attribute: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), SceneError> {
        if expected != found {
            return Err(SceneError::AttributeCountMismatch {
                attribute,
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Nearest triangle hit, culled first by the object-space bounding box.
    pub fn local_intersect(&self, object_ray: &Ray) -> Option<LocalHit> {
        if !self.bounding_box.is_hit_by(object_ray) {
            return None;
        }
        let mut ray = *object_ray;
        let mut nearest = None;
        for triangle in &self.triangles {
            if let Some(hit) = triangle.local_intersect(&ray) {
                ray = ray.with_t_max(hit.t);
                nearest = Some(hit);
            }
        }
        nearest
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn normals(&self) -> Option<&[Normal]> {
        self.normals.as_deref()
    }

    pub fn uvs(&self) -> Option<&[Point2]> {
        self.uvs.as_deref()
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
