use glam::{Vec2, Vec3};

/// Pointer position in client pixels to normalized device coordinates.
#[inline]
pub fn client_to_ndc(client: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        client.x / viewport_size.x * 2.0 - 1.0,
        1.0 - client.y / viewport_size.y * 2.0,
    ))
}

/// Intersect a ray with an axis-aligned rectangle lying in the plane
/// `z = center.z`, facing +Z. Returns `(t, uv)` with UV origin bottom-left.
#[inline]
pub fn ray_rect(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, size: Vec2) -> Option<(f32, Vec2)> {
    if size.x <= 0.0 || size.y <= 0.0 || ray_dir.z.abs() < 1e-8 {
        return None;
    }
    let t = (center.z - ray_origin.z) / ray_dir.z;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    let u = (hit.x - center.x) / size.x + 0.5;
    let v = (hit.y - center.y) / size.y + 0.5;
    ((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)).then_some((t, Vec2::new(u, v)))
}

/// Nearest hit among `(index, center, size)` candidates.
pub fn nearest_hit<I>(ray_origin: Vec3, ray_dir: Vec3, candidates: I) -> Option<(usize, Vec2)>
where
    I: IntoIterator<Item = (usize, Vec3, Vec2)>,
{
    let mut best: Option<(usize, f32, Vec2)> = None;
    for (i, center, size) in candidates {
        if let Some((t, uv)) = ray_rect(ray_origin, ray_dir, center, size) {
            match best {
                Some((_, bt, _)) if t >= bt => {}
                _ => best = Some((i, t, uv)),
            }
        }
    }
    best.map(|(i, _, uv)| (i, uv))
}
