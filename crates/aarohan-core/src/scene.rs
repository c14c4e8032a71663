//! The festival totem shown behind the hero copy.
//!
//! A lantern-like icosphere shell with light beams fanning out of it, wrapped
//! by three tilted golden rings. The scene is pure state: the frame loop calls
//! `advance(dt, pointer)` once per frame and the painter asks for world-space
//! line segments to draw.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, TAU};

use fnv::{FnvHashMap, FnvHashSet};
use glam::{Mat4, Vec2, Vec3, Vec4};
use rand::prelude::*;

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub scale: f32,
    pub float_amplitude: f32,
    pub float_speed: f32,
    pub core_spin_y: f32,
    pub core_spin_z: f32,
    pub ring_wobble_amplitude: f32,
    pub ring_wobble_speed: f32,
    pub ring_spin: f32,
    pub pointer_tilt: f32,
    pub pointer_follow: f32,
    pub auto_rotate_speed: f32,
    pub beam_count: usize,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            scale: TOTEM_SCALE,
            float_amplitude: TOTEM_FLOAT_AMPLITUDE,
            float_speed: TOTEM_FLOAT_SPEED,
            core_spin_y: CORE_SPIN_Y_PER_SEC,
            core_spin_z: CORE_SPIN_Z_PER_SEC,
            ring_wobble_amplitude: RING_WOBBLE_AMPLITUDE,
            ring_wobble_speed: RING_WOBBLE_SPEED,
            ring_spin: RING_SPIN_PER_SEC,
            pointer_tilt: POINTER_TILT,
            pointer_follow: POINTER_FOLLOW,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            beam_count: BEAM_COUNT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Beam {
    pub rotation: Vec3,
    pub color: &'static str,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Ring {
    pub radius: f32,
    pub tube: f32,
    pub rotation: Vec3,
}

pub const RINGS: [Ring; 3] = [
    Ring {
        radius: 1.4,
        tube: 0.02,
        rotation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
    },
    Ring {
        radius: 1.8,
        tube: 0.015,
        rotation: Vec3::new(0.0, FRAC_PI_4, 0.0),
    },
    Ring {
        radius: 2.2,
        tube: 0.01,
        rotation: Vec3::new(FRAC_PI_3, 0.0, FRAC_PI_3),
    },
];

/// A world-space line ready to be projected and stroked.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
    pub color: &'static str,
    pub alpha: f32,
    pub width: f32,
}

pub struct TotemScene {
    params: SceneParams,
    beams: Vec<Beam>,
    shell_edges: Vec<(Vec3, Vec3)>,
    elapsed: f32,
    group_y: f32,
    group_tilt: Vec2, // x: pitch, y: yaw
    core_rotation: Vec3,
    ring_rotation: Vec2,
    orbit_angle: f32,
}

impl TotemScene {
    pub fn new(params: SceneParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let beams = (0..params.beam_count)
            .map(|_| Beam {
                rotation: Vec3::new(
                    rng.gen::<f32>() * TAU,
                    rng.gen::<f32>() * TAU,
                    rng.gen::<f32>() * TAU,
                ),
                color: BEAM_COLORS[rng.gen_range(0..BEAM_COLORS.len())],
                scale: 0.5 + rng.gen::<f32>() * 0.5,
            })
            .collect();
        Self {
            params,
            beams,
            shell_edges: icosphere_edges(SHELL_RADIUS, 1),
            elapsed: 0.0,
            group_y: 0.0,
            group_tilt: Vec2::ZERO,
            core_rotation: Vec3::ZERO,
            ring_rotation: Vec2::ZERO,
            orbit_angle: 0.0,
        }
    }

    /// One frame. `pointer` is in normalised device coordinates.
    pub fn advance(&mut self, dt_sec: f32, pointer: Vec2) {
        let dt = dt_sec.max(0.0);
        let p = &self.params;
        self.elapsed += dt;
        let t = self.elapsed;

        self.group_y = (t * p.float_speed).sin() * p.float_amplitude;

        self.core_rotation.y += dt * p.core_spin_y;
        self.core_rotation.z += dt * p.core_spin_z;

        self.ring_rotation.x = (t * p.ring_wobble_speed).sin() * p.ring_wobble_amplitude;
        self.ring_rotation.y = t * p.ring_spin;

        // frame-rate independent version of a fixed per-frame lerp
        let follow = 1.0 - (1.0 - p.pointer_follow).powf(dt * 60.0);
        let target = Vec2::new(-pointer.y * p.pointer_tilt, pointer.x * p.pointer_tilt);
        self.group_tilt = self.group_tilt.lerp(target, follow);

        self.orbit_angle = (self.orbit_angle + p.auto_rotate_speed * TAU / 60.0 * dt) % TAU;
    }

    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(-self.orbit_angle)
            * Mat4::from_translation(Vec3::new(0.0, self.group_y, 0.0))
            * Mat4::from_rotation_x(self.group_tilt.x)
            * Mat4::from_rotation_y(self.group_tilt.y)
            * Mat4::from_scale(Vec3::splat(self.params.scale))
    }

    pub fn core_matrix(&self) -> Mat4 {
        self.group_matrix() * euler_xyz(self.core_rotation)
    }

    pub fn rings_matrix(&self) -> Mat4 {
        self.group_matrix()
            * Mat4::from_rotation_x(self.ring_rotation.x)
            * Mat4::from_rotation_y(self.ring_rotation.y)
    }

    /// All lines of the current frame in world space.
    pub fn segments(&self, ring_steps: usize) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.beams.len() * 4 + self.shell_edges.len() + 3 * ring_steps);

        let core = self.core_matrix();
        for beam in &self.beams {
            let m = core * euler_xyz(beam.rotation);
            for k in 0..4 {
                let a = k as f32 * FRAC_PI_2;
                let base = Vec3::new(a.cos() * BEAM_BOTTOM_RADIUS, 0.0, a.sin() * BEAM_BOTTOM_RADIUS);
                let tip = Vec3::new(a.cos() * BEAM_TOP_RADIUS, BEAM_HEIGHT, a.sin() * BEAM_TOP_RADIUS);
                out.push(Segment {
                    a: m.transform_point3(base),
                    b: m.transform_point3(tip),
                    color: beam.color,
                    alpha: BEAM_OPACITY,
                    width: 1.0 + beam.scale,
                });
            }
        }

        for (a, b) in &self.shell_edges {
            out.push(Segment {
                a: core.transform_point3(*a),
                b: core.transform_point3(*b),
                color: SHELL_COLOR,
                alpha: SHELL_OPACITY,
                width: 1.0,
            });
        }

        let rings = self.rings_matrix();
        let steps = ring_steps.max(3);
        for ring in &RINGS {
            let m = rings * euler_xyz(ring.rotation);
            let point = |i: usize| {
                let a = i as f32 / steps as f32 * TAU;
                m.transform_point3(Vec3::new(a.cos() * ring.radius, a.sin() * ring.radius, 0.0))
            };
            for i in 0..steps {
                out.push(Segment {
                    a: point(i),
                    b: point(i + 1),
                    color: RING_COLOR,
                    alpha: 1.0,
                    width: ring.tube * 100.0,
                });
            }
        }
        out
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn group_tilt(&self) -> Vec2 {
        self.group_tilt
    }

    pub fn group_y(&self) -> f32 {
        self.group_y
    }

    pub fn core_rotation(&self) -> Vec3 {
        self.core_rotation
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn shell_edge_count(&self) -> usize {
        self.shell_edges.len()
    }
}

#[inline]
fn euler_xyz(r: Vec3) -> Mat4 {
    Mat4::from_rotation_x(r.x) * Mat4::from_rotation_y(r.y) * Mat4::from_rotation_z(r.z)
}

/// Unique edges of an icosphere with `detail` rounds of 4-way subdivision.
pub fn icosphere_edges(radius: f32, detail: u32) -> Vec<(Vec3, Vec3)> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut verts: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();
    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    for _ in 0..detail {
        let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut midpoint = |a: u32, b: u32, verts: &mut Vec<Vec3>| -> u32 {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let m = ((verts[a as usize] + verts[b as usize]) * 0.5).normalize();
                verts.push(m);
                (verts.len() - 1) as u32
            })
        };
        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = midpoint(a, b, &mut verts);
            let bc = midpoint(b, c, &mut verts);
            let ca = midpoint(c, a, &mut verts);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
    let mut edges = Vec::new();
    for [a, b, c] in faces {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            if seen.insert((p.min(q), p.max(q))) {
                edges.push((verts[p as usize] * radius, verts[q as usize] * radius));
            }
        }
    }
    edges
}

/// Fixed perspective camera looking at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }
}

/// World point to pixel coordinates (origin top-left). `None` when clipped.
#[inline]
pub fn project(view_proj: &Mat4, p: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip: Vec4 = *view_proj * p.extend(1.0);
    if clip.w <= 1e-5 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(-1.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}
