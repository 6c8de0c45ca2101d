//! Box sizes approximating a Gaussian through repeated box blurs.
//!
//! Repeating a box filter converges on a Gaussian. Mixing two odd widths,
//! `wl` and `wl + 2`, lets `n` passes match a target standard deviation
//! closely without ringing from a single oversized box.
//!
//! See <http://blog.ivank.net/fastest-gaussian-blur.html>.

/// Compute `n` box sizes whose compounded blur approximates a Gaussian with
/// standard deviation `sigma`.
///
/// The first `m` entries are the lower odd width `wl`, the rest `wl + 2`.
/// Larger `n` approximates a true Gaussian better at the cost of speed.
/// Returns an empty vector when `n` is zero.
pub fn box_sizes(sigma: f32, n: u32) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }

    let n_float = n as f32;
    let w_ideal = (12.0 * sigma * sigma / n_float + 1.0).sqrt();

    let mut wl = w_ideal.floor();
    if (wl as i64) % 2 == 0 {
        wl -= 1.0;
    }
    let wu = wl + 2.0;

    let m_ideal = (12.0 * sigma * sigma - n_float * wl * wl - 4.0 * n_float * wl - 3.0 * n_float)
        / (-4.0 * wl - 4.0);
    let m = m_ideal.round();

    (0..n)
        .map(|i| if (i as f32) < m { wl } else { wu })
        .collect()
}
