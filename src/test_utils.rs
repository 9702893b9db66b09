pub fn linspace(start: f64, end: f64, num: usize) -> impl Iterator<Item = f64> {
    let step = if num > 1 {
        (end - start) / (num - 1) as f64
    } else {
        0.0
    };
    (0..num).map(move |i| start + i as f64 * step)
}

/// A grid of points inside (-1, 1)^DIM, avoiding the symmetric center and the boundary.
pub fn sample_points<const DIM: usize>() -> Vec<[f64; DIM]> {
    let coords = linspace(-0.85, 0.7, 4).collect::<Vec<_>>();
    let n = coords.len();
    (0..n.pow(DIM as u32))
        .map(|flat| {
            let mut remainder = flat;
            std::array::from_fn(|_| {
                let c = coords[remainder % n];
                remainder /= n;
                c
            })
        })
        .collect()
}

/// Central difference approximation of the derivative of `f` along axis `d` at `p`.
pub fn central_difference<const DIM: usize>(
    f: impl Fn([f64; DIM]) -> f64,
    p: [f64; DIM],
    d: usize,
    h: f64,
) -> f64 {
    let mut p_plus = p;
    p_plus[d] += h;
    let mut p_minus = p;
    p_minus[d] -= h;
    (f(p_plus) - f(p_minus)) / (2.0 * h)
}

pub fn init_test_logger() {
    use std::io::Write as _;
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .format(|buf, record| {
            // Ansi256 ref: https://hexdocs.pm/color_palette/ansi_color_codes.html
            let bg = anstyle::Ansi256Color(240);
            let level_style = buf
                .default_level_style(record.level())
                .bg_color(Some(bg.into()));
            let grey = anstyle::Ansi256Color(255).on(bg);

            let module = record.module_path().unwrap_or("unknown");
            writeln!(
                buf,
                "{grey}[{grey:#}{level_style}{}{level_style:#}{grey} {}:{}]{grey:#}   {}",
                record.level(),
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions as pa;

    use super::*;

    #[test]
    fn sample_points_cover_grid() {
        let points = sample_points::<2>();
        pa::assert_eq!(points.len(), 16);
        pa::assert_eq!(points[0], [-0.85, -0.85]);
        pa::assert_eq!(points[1][1], -0.85);
        pa::assert_eq!(points[4][0], -0.85);
    }

    #[test]
    fn central_difference_of_quadratic() {
        // d/dy (x^2 + 3 x y) = 3 x
        let f = |p: [f64; 2]| p[0] * p[0] + 3.0 * p[0] * p[1];
        assert_abs_diff_eq!(central_difference(f, [2.0, 1.0], 1, 1e-4), 6.0, epsilon = 1e-8);
    }
}
