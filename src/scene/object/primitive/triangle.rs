use super::shape::LocalHit;
use crate::{
    approx_eq::EPSILON,
    error::SceneError,
    math::{normal::Normal, point::Point, point2::Point2, tuple::Tuple, vector::Vector},
    render::ray::Ray,
    scene::object::bounding_box::BoundingBox,
};

/// Ray parameter together with the barycentric weights of `p1`, `p2` and `p3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarycentricHit {
    pub t: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
    normal: Normal,
    /// Per-vertex normals for smooth shading
    vertex_normals: Option<[Normal; 3]>,
    uvs: [Point2; 3],
}

impl Triangle {
    pub const DEFAULT_UVS: [Point2; 3] = [
        Point2::new(0., 0.),
        Point2::new(1., 0.),
        Point2::new(0., 1.),
    ];

    /// Flat triangle. Fails if the vertices are collinear.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Result<Self, SceneError> {
        let normal = (p2 - p1)
            .cross(p3 - p1)
            .normalize()
            .map_err(|_| SceneError::DegenerateTriangle)?;
        Ok(Self {
            p1,
            p2,
            p3,
            normal: normal.into(),
            vertex_normals: None,
            uvs: Self::DEFAULT_UVS,
        })
    }

    pub fn with_vertex_normals(mut self, normals: [Normal; 3]) -> Self {
        self.vertex_normals = Some(normals);
        self
    }

    pub fn with_uvs(mut self, uvs: [Point2; 3]) -> Self {
        self.uvs = uvs;
        self
    }

    /// Solves `o + t*d = p1 + beta*(p2 - p1) + gamma*(p3 - p1)` with Cramer's rule.
    pub fn barycentric_hit(&self, object_ray: &Ray) -> Option<BarycentricHit> {
        let (p1, p2, p3) = (self.p1, self.p2, self.p3);
        let origin = object_ray.origin();
        let direction = object_ray.direction();

        let a = p1.x() - p2.x();
        let b = p1.y() - p2.y();
        let c = p1.z() - p2.z();
        let d = p1.x() - p3.x();
        let e = p1.y() - p3.y();
        let f = p1.z() - p3.z();
        let g = direction.x();
        let h = direction.y();
        let i = direction.z();
        let j = p1.x() - origin.x();
        let k = p1.y() - origin.y();
        let l = p1.z() - origin.z();

        let ei_minus_hf = e * i - h * f;
        let gf_minus_di = g * f - d * i;
        let dh_minus_eg = d * h - e * g;

        // m is (e1 x e2) . d, so the parallel test is relative to the triangle and ray sizes
        let m = a * ei_minus_hf + b * gf_minus_di + c * dh_minus_eg;
        let scale = (p2 - p1).cross(p3 - p1).magnitude() * direction.magnitude();
        if !m.is_finite() || m.abs() <= EPSILON * scale {
            return None;
        }

        let beta = (j * ei_minus_hf + k * gf_minus_di + l * dh_minus_eg) / m;
        if beta < 0. {
            return None;
        }

        let ak_minus_jb = a * k - j * b;
        let jc_minus_al = j * c - a * l;
        let bl_minus_kc = b * l - k * c;

        let gamma = (i * ak_minus_jb + h * jc_minus_al + g * bl_minus_kc) / m;
        if gamma < 0. || beta + gamma > 1. {
            return None;
        }

        let t = -(f * ak_minus_jb + e * jc_minus_al + d * bl_minus_kc) / m;
        if !object_ray.contains(t) {
            return None;
        }

        Some(BarycentricHit {
            t,
            alpha: 1. - beta - gamma,
            beta,
            gamma,
        })
    }

    pub fn local_intersect(&self, object_ray: &Ray) -> Option<LocalHit> {
        let hit = self.barycentric_hit(object_ray)?;
        let normal = match self.vertex_normals {
            Some([n1, n2, n3]) => n1 * hit.alpha + n2 * hit.beta + n3 * hit.gamma,
            None => self.normal,
        };
        let [uv1, uv2, uv3] = self.uvs;

        Some(LocalHit {
            t: hit.t,
            normal,
            uv: uv1 * hit.alpha + uv2 * hit.beta + uv3 * hit.gamma,
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points([self.p1, self.p2, self.p3])
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    pub fn normal(&self) -> Normal {
        self.normal
    }

    pub fn edges(&self) -> (Vector, Vector) {
        (self.p2 - self.p1, self.p3 - self.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_low_prec;

    fn get_triangle() -> Triangle {
        Triangle::new(
            Point::new(0., 1., 0.),
            Point::new(-1., 0., 0.),
            Point::new(1., 0., 0.),
        )
        .unwrap()
    }

    #[test]
    fn constructing_triangle() {
        let t = get_triangle();
        let (e1, e2) = t.edges();
        assert_approx_eq_low_prec!(e1, Vector::new(-1., -1., 0.));
        assert_approx_eq_low_prec!(e2, Vector::new(1., -1., 0.));
        assert_approx_eq_low_prec!(t.normal(), Normal::new(0., 0., 1.));
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let result = Triangle::new(
            Point::new(0., 0., 0.),
            Point::new(1., 1., 1.),
            Point::new(2., 2., 2.),
        );
        assert_eq!(result, Err(SceneError::DegenerateTriangle));
    }

    #[test]
    fn intersecting_triangle_with_parallel_ray() {
        let ray = Ray::new(Point::new(0., -1., -2.), Vector::new(0., 1., 0.));
        assert!(get_triangle().local_intersect(&ray).is_none());
    }

    #[test]
    fn ray_misses_edges() {
        let t = get_triangle();
        let direction = Vector::new(0., 0., 1.);
        for origin in [
            Point::new(1., 1., -2.),
            Point::new(-1., 1., -2.),
            Point::new(0., -1., -2.),
        ] {
            assert!(t.local_intersect(&Ray::new(origin, direction)).is_none());
        }
    }

    #[test]
    fn ray_strikes_triangle() {
        let ray = Ray::new(Point::new(0., 0.5, -2.), Vector::new(0., 0., 1.));
        let hit = get_triangle().barycentric_hit(&ray).unwrap();

        assert_approx_eq_low_prec!(hit.t, 2.);
        assert_approx_eq_low_prec!(hit.alpha, 0.5);
        assert_approx_eq_low_prec!(hit.beta, 0.25);
        assert_approx_eq_low_prec!(hit.gamma, 0.25);
    }

    #[test]
    fn barycentric_weights_partition_unity() {
        let t = get_triangle();
        let direction = Vector::new(0., 0., 1.);
        for (x, y) in [(0., 0.9), (-0.4, 0.3), (0.7, 0.1), (0.05, 0.05)] {
            let hit = t
                .barycentric_hit(&Ray::new(Point::new(x, y, -1.), direction))
                .unwrap();
            assert_approx_eq_low_prec!(hit.alpha + hit.beta + hit.gamma, 1.);
            for weight in [hit.alpha, hit.beta, hit.gamma] {
                assert!((0.0..=1.).contains(&weight));
            }
        }
    }

    #[test]
    fn ray_through_vertex_gives_that_vertex_full_weight() {
        let t = get_triangle();
        let direction = Vector::new(0., 0., 1.);
        let expected = [(1., 0., 0.), (0., 1., 0.), (0., 0., 1.)];

        for (vertex, (alpha, beta, gamma)) in t.vertices().into_iter().zip(expected) {
            let origin = Point::new(vertex.x(), vertex.y(), -1.);
            let hit = t.barycentric_hit(&Ray::new(origin, direction)).unwrap();
            assert_approx_eq_low_prec!(hit.t, 1.);
            assert_approx_eq_low_prec!(hit.alpha, alpha);
            assert_approx_eq_low_prec!(hit.beta, beta);
            assert_approx_eq_low_prec!(hit.gamma, gamma);
        }
    }

    #[test]
    fn tiny_triangle_is_still_hit() {
        let size = 5e-6;
        let t = Triangle::new(
            Point::new(0., 0., 0.),
            Point::new(size, 0., 0.),
            Point::new(0., size, 0.),
        )
        .unwrap();
        let ray = Ray::new(Point::new(size / 5., size / 5., -5.), Vector::new(0., 0., 1.));

        let hit = t.barycentric_hit(&ray).unwrap();
        assert_approx_eq_low_prec!(hit.t, 5.);
        assert_approx_eq_low_prec!(hit.beta, 0.2);
        assert_approx_eq_low_prec!(hit.gamma, 0.2);
    }

    #[test]
    fn hit_beyond_t_max_is_rejected() {
        let ray = Ray::with_range(Point::new(0., 0.5, -2.), Vector::new(0., 0., 1.), 0., 2.);
        assert!(get_triangle().local_intersect(&ray).is_none());
    }

    #[test]
    fn smooth_normal_and_uv_are_blended() {
        let t = get_triangle()
            .with_vertex_normals([
                Normal::new(0., 1., 0.),
                Normal::new(-1., 0., 0.),
                Normal::new(1., 0., 0.),
            ])
            .with_uvs([
                Point2::new(0.5, 1.),
                Point2::new(0., 0.),
                Point2::new(1., 0.),
            ]);
        let ray = Ray::new(Point::new(-0.2, 0.3, -2.), Vector::new(0., 0., 1.));
        let hit = t.local_intersect(&ray).unwrap();

        // alpha = 0.3, beta = 0.45, gamma = 0.25
        assert_approx_eq_low_prec!(hit.normal, Normal::new(-0.2, 0.3, 0.));
        assert_approx_eq_low_prec!(hit.uv, Point2::new(0.4, 0.3));
    }

    #[test]
    fn default_uvs_follow_beta_and_gamma() {
        let ray = Ray::new(Point::new(0., 0.5, -2.), Vector::new(0., 0., 1.));
        let hit = get_triangle().local_intersect(&ray).unwrap();
        assert_approx_eq_low_prec!(hit.uv, Point2::new(0.25, 0.25));
        assert_approx_eq_low_prec!(hit.normal, Normal::new(0., 0., 1.));
    }
}
