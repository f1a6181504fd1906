//! Bernstein-basis Bezier evaluation.
//!
//! The basis is `C(n, i) * t^(n - i) * (1 - t)^i` for control point `i`, so the first sample
//! (`t = 0`) lands on the LAST control point and the final sample (`t = 1`) on the first.
//! Ribbon edges are filled between two curves sampled at the same parameters, so the direction
//! does not matter to callers, but the exact basis does: adjacent ribbons rely on identical
//! shapes.

use alluvial_core::geom::Point;

/// Sampled curve, `xs[j]` / `ys[j]` are the coordinates of sample `j`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `C(n, k)` computed multiplicatively; every partial product is itself a binomial coefficient,
/// so the result stays exact while it fits in the f64 mantissa.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0_f64;
    for j in 0..k {
        c = c * (n - j) as f64 / (j + 1) as f64;
    }
    c.round()
}

pub fn bernstein(i: usize, n: usize, t: f64) -> f64 {
    binomial(n, i) * t.powi((n - i) as i32) * (1.0 - t).powi(i as i32)
}

/// `samples` evenly spaced parameters over `[0, 1]`, both ends included.
fn linspace(samples: usize) -> impl Iterator<Item = f64> {
    let last = samples.saturating_sub(1);
    (0..samples).map(move |j| {
        if last == 0 {
            0.0
        } else if j == last {
            1.0
        } else {
            j as f64 / last as f64
        }
    })
}

pub fn evaluate(control_points: &[Point], samples: usize) -> Curve {
    if control_points.is_empty() || samples == 0 {
        return Curve::default();
    }

    let n = control_points.len() - 1;
    let coefficients: Vec<f64> = (0..=n).map(|i| binomial(n, i)).collect();

    let mut curve = Curve {
        xs: Vec::with_capacity(samples),
        ys: Vec::with_capacity(samples),
    };
    for t in linspace(samples) {
        let mut x = 0.0;
        let mut y = 0.0;
        for (i, p) in control_points.iter().enumerate() {
            let b = coefficients[i] * t.powi((n - i) as i32) * (1.0 - t).powi(i as i32);
            x += p.x * b;
            y += p.y * b;
        }
        curve.xs.push(x);
        curve.ys.push(y);
    }
    curve
}
