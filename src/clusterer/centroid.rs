use crate::color::Rgb;

/// Channel-wise arithmetic mean of a set of colors.
///
/// Returns `None` for an empty set so callers can keep the previous centroid.
pub fn compute_centroid(colors: &[&Rgb]) -> Option<Rgb> {
    if colors.is_empty() {
        return None;
    }

    let mut out = Rgb::default();
    for c in colors {
        out.r += c.r;
        out.g += c.g;
        out.b += c.b;
    }

    let n = colors.len() as f64;
    out.r /= n;
    out.g /= n;
    out.b /= n;

    Some(out)
}
