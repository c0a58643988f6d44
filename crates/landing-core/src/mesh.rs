//! Static geometry builders for the background scene. Topology is created
//! once at mount and only colors/transforms change per frame.

use glam::Vec3;

/// Line-list vertices for a square grid of `divisions` cells on the XZ plane
/// at height `y`, centered on the origin.
pub fn grid_lines(size: f32, divisions: u32, y: f32) -> Vec<Vec3> {
    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;
    let mut verts = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        // line along X, then along Z
        verts.push(Vec3::new(-half, y, k));
        verts.push(Vec3::new(half, y, k));
        verts.push(Vec3::new(k, y, -half));
        verts.push(Vec3::new(k, y, half));
    }
    verts
}

/// Triangle-list vertices for a filled disc in the XY plane at the origin.
pub fn disc_triangles(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    let mut verts = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
        let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;
        verts.push(Vec3::ZERO);
        verts.push(Vec3::new(a0.cos() * radius, a0.sin() * radius, 0.0));
        verts.push(Vec3::new(a1.cos() * radius, a1.sin() * radius, 0.0));
    }
    verts
}

/// Triangle-list vertices for a flat ring (annulus) in the XY plane spanning
/// `radius - tube ..= radius + tube`.
pub fn annulus_triangles(radius: f32, tube: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    let inner = (radius - tube).max(0.0);
    let outer = radius + tube;
    let mut verts = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
        let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;
        let (c0, s0) = (a0.cos(), a0.sin());
        let (c1, s1) = (a1.cos(), a1.sin());
        let i0 = Vec3::new(c0 * inner, s0 * inner, 0.0);
        let o0 = Vec3::new(c0 * outer, s0 * outer, 0.0);
        let i1 = Vec3::new(c1 * inner, s1 * inner, 0.0);
        let o1 = Vec3::new(c1 * outer, s1 * outer, 0.0);
        verts.extend_from_slice(&[i0, o0, o1, i0, o1, i1]);
    }
    verts
}

/// Triangle-list vertices for a `width`×`height` quad in the XY plane.
pub fn quad_triangles(width: f32, height: f32) -> Vec<Vec3> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    vec![
        Vec3::new(-hw, -hh, 0.0),
        Vec3::new(hw, -hh, 0.0),
        Vec3::new(hw, hh, 0.0),
        Vec3::new(-hw, -hh, 0.0),
        Vec3::new(hw, hh, 0.0),
        Vec3::new(-hw, hh, 0.0),
    ]
}
