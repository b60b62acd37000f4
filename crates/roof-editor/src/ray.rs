//! Ray casting utilities
//!
//! One plane intersection shared by every drag handle, plus the shape tests
//! used for handle picking: ray-cylinder (edge and height grips), ray-sphere
//! (rotate grip) and ray-triangle (roof body).

use glam::Vec3;

/// Parallel-ray threshold for plane and triangle tests
const EPSILON: f32 = 1e-6;

/// Half-line with a unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Plane `normal · p + constant = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// Plane with the given normal passing through `point`
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            constant: -normal.dot(point),
        }
    }

    /// Horizontal plane at height `y`
    pub fn horizontal(y: f32) -> Self {
        Self {
            normal: Vec3::Y,
            constant: -y,
        }
    }

    /// Signed distance from the plane
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}

/// Intersect a ray with a plane.
///
/// Returns `None` when the ray runs parallel to the plane or the plane lies
/// behind the ray origin.
pub fn intersect_ray_with_plane(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = ray.direction.dot(plane.normal);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = -plane.distance_to_point(ray.origin) / denom;
    if t < 0.0 {
        return None;
    }

    Some(ray.at(t))
}

/// Ray-cylinder intersection test.
///
/// Tests a capped cylinder between `cylinder_start` and `cylinder_end`.
/// The side is solved as a 2D quadratic in the plane perpendicular to the
/// axis, keeping both roots so a ray starting inside still hits the far
/// wall; the two end discs are tested separately, which is what catches
/// rays running along the axis.
///
/// Returns the ray parameter of the nearest non-negative hit.
pub fn ray_cylinder_intersection(
    ray: &Ray,
    cylinder_start: Vec3,
    cylinder_end: Vec3,
    radius: f32,
) -> Option<f32> {
    let cylinder_axis = (cylinder_end - cylinder_start).normalize_or_zero();
    let cylinder_length = (cylinder_end - cylinder_start).length();
    let within_length = |t: f32| {
        let projection = (ray.at(t) - cylinder_start).dot(cylinder_axis);
        (0.0..=cylinder_length).contains(&projection)
    };

    let mut nearest: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && nearest.is_none_or(|best| t < best) {
            nearest = Some(t);
        }
    };

    // d = ray_dir - (ray_dir · axis) * axis
    let d = ray.direction - cylinder_axis * ray.direction.dot(cylinder_axis);
    // o = (origin - start) - ((origin - start) · axis) * axis
    let offset = ray.origin - cylinder_start;
    let o = offset - cylinder_axis * offset.dot(cylinder_axis);

    // Quadratic coefficients: at² + bt + c = 0
    let a = d.dot(d);
    if a >= EPSILON {
        let b = 2.0 * d.dot(o);
        let c = o.dot(o) - radius * radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let sqrt_d = discriminant.sqrt();
            for t in [(-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a)] {
                if t >= 0.0 && within_length(t) {
                    consider(t);
                }
            }
        }
    }

    let along = ray.direction.dot(cylinder_axis);
    if along.abs() >= EPSILON {
        for cap in [cylinder_start, cylinder_end] {
            let t = (cap - ray.origin).dot(cylinder_axis) / along;
            if t >= 0.0 && ray.at(t).distance_squared(cap) <= radius * radius {
                consider(t);
            }
        }
    }

    nearest
}

/// Ray-sphere intersection test, returning the nearest non-negative parameter
pub fn ray_sphere_intersection(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    let far = -b + sqrt_d;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Origin inside the sphere
        Some(far)
    } else {
        None
    }
}

/// Ray-triangle intersection (Möller–Trumbore), accepting both faces
pub fn ray_triangle_intersection(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - v0;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}
