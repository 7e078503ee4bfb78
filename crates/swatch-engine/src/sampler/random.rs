use rand::Rng;

/// Margin used when adding points without diversity checks.
pub const RANDOM_PLACEMENT_MARGIN: f64 = 16.0;

/// Draw `count` uniformly random positions inside a fixed 16px margin.
///
/// Used when growing an existing working set, where fresh points only need
/// to land somewhere sensible.
pub fn random_points<R>(count: usize, width: f64, height: f64, rng: &mut R) -> Vec<(f64, f64)>
where
    R: Rng + ?Sized,
{
    let span_x = width - 2.0 * RANDOM_PLACEMENT_MARGIN;
    let span_y = height - 2.0 * RANDOM_PLACEMENT_MARGIN;
    (0..count)
        .map(|_| {
            (
                rng.gen::<f64>() * span_x + RANDOM_PLACEMENT_MARGIN,
                rng.gen::<f64>() * span_y + RANDOM_PLACEMENT_MARGIN,
            )
        })
        .collect()
}
