//! Ray casting against scene meshes.
//!
//! Rays are tested against the analytic [`Shape`] of each candidate in the
//! candidate's local space, then hits are reported in world space and sorted
//! nearest first.

use glam::{Affine3A, Vec2, Vec3};

use crate::resources::Shape;
use crate::scene::{Camera, NodeHandle, Scene};

const EPSILON: f32 = 1e-6;

/// Half-line `origin + t * direction`, `t >= 0`, with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Normalizes `direction`; a zero direction yields a ray along -Z.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub node: NodeHandle,
    /// World-space distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Tests `ray` against every candidate and returns the hits, nearest first.
///
/// Only visible nodes with pickable meshes are tested. Nodes whose world
/// matrix cannot be inverted (for instance scaled to zero) are skipped.
/// World matrices are read as they are, so call
/// [`Scene::update_transforms`] first.
#[must_use]
pub fn intersect_objects(scene: &Scene, ray: &Ray, candidates: &[NodeHandle]) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = candidates
        .iter()
        .filter_map(|&node| intersect_object(scene, ray, node))
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest hit under an NDC point, or `None` on a miss.
#[must_use]
pub fn pick(
    scene: &Scene,
    camera: &Camera,
    ndc: Vec2,
    candidates: &[NodeHandle],
) -> Option<Intersection> {
    let ray = camera.ray_from_ndc(ndc);
    intersect_objects(scene, &ray, candidates).into_iter().next()
}

fn intersect_object(scene: &Scene, ray: &Ray, node: NodeHandle) -> Option<Intersection> {
    let n = scene.get_node(node)?;
    if !n.visible {
        return None;
    }
    let mesh = scene.mesh(node)?;
    if !mesh.is_pickable() {
        return None;
    }

    let world: &Affine3A = n.world_matrix();
    if world.matrix3.determinant().abs() < EPSILON * EPSILON {
        return None;
    }
    let inverse = world.inverse();

    // The affine map preserves the ray parameter, so a local `t` is the
    // world distance along the unit world direction.
    let local_origin = inverse.transform_point3(ray.origin);
    let local_dir = inverse.transform_vector3(ray.direction);

    let t = match mesh.geometry.shape {
        Shape::Box { half_extents } => intersect_box(local_origin, local_dir, half_extents),
        Shape::Sphere { radius } => intersect_sphere(local_origin, local_dir, radius),
        Shape::Cone { radius, height } => intersect_cone(local_origin, local_dir, radius, height),
        Shape::Points => None,
    }?;

    Some(Intersection {
        node,
        distance: t,
        point: ray.at(t),
    })
}

/// Slab test. Returns the entry distance, or the exit distance when the
/// origin is inside.
fn intersect_box(o: Vec3, d: Vec3, half: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let (o, d, h) = (o[axis], d[axis], half[axis]);
        if d.abs() < EPSILON {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let (t1, t2) = ((-h - o) / d, (h - o) / d);
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < t_min.max(0.0) {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

fn intersect_sphere(o: Vec3, d: Vec3, radius: f32) -> Option<f32> {
    let a = d.dot(d);
    let b = 2.0 * o.dot(d);
    let c = o.dot(o) - radius * radius;
    let (t0, t1) = solve_quadratic(a, b, c)?;
    if t1 < 0.0 {
        return None;
    }
    Some(if t0 >= 0.0 { t0 } else { t1 })
}

/// Lateral surface plus base cap of a cone with its apex at `+height / 2`.
fn intersect_cone(o: Vec3, d: Vec3, radius: f32, height: f32) -> Option<f32> {
    if height <= 0.0 {
        return None;
    }
    let half = height * 0.5;
    let k2 = (radius / height).powi(2);

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.is_none_or(|b| t < b) {
            best = Some(t);
        }
    };

    // x² + z² = k² (h/2 - y)²
    let apex_dist = half - o.y;
    let a = d.x * d.x + d.z * d.z - k2 * d.y * d.y;
    let b = 2.0 * (o.x * d.x + o.z * d.z + k2 * apex_dist * d.y);
    let c = o.x * o.x + o.z * o.z - k2 * apex_dist * apex_dist;

    let on_side = |t: f32| {
        let y = o.y + d.y * t;
        (-half..=half).contains(&y)
    };

    if a.abs() < EPSILON {
        if b.abs() >= EPSILON {
            let t = -c / b;
            if on_side(t) {
                consider(t);
            }
        }
    } else if let Some((t0, t1)) = solve_quadratic(a, b, c) {
        for t in [t0, t1] {
            if on_side(t) {
                consider(t);
            }
        }
    }

    // Base cap
    if d.y.abs() >= EPSILON {
        let t = (-half - o.y) / d.y;
        let p = o + d * t;
        if p.x * p.x + p.z * p.z <= radius * radius {
            consider(t);
        }
    }

    best
}

/// Real roots in ascending order.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    if a.abs() < EPSILON {
        return None;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt = disc.sqrt();
    let (t0, t1) = ((-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a));
    Some((t0.min(t1), t0.max(t1)))
}
