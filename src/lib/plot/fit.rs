//! Least squares polynomial fitting, used to draw the trend of the scattered series

/// A polynomial fitted over a set of samples.
///
/// The abscissas are mapped into `[-1, 1]` before fitting, so the normal
/// equations stay well conditioned for the sizes being swept (hundreds
/// raised to the eighth power otherwise)
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// Coefficients over the normalized abscissa, lowest degree first
    coefficients: Vec<f64>,
    center: f64,
    half_width: f64,
}

impl Polynomial {
    /// Fits a polynomial of `degree` over the samples by least squares.
    ///
    /// Returns [`None`] when there are fewer distinct samples than coefficients
    /// to determine, or when the input lengths don't match
    ///
    /// ```rust
    /// use cxxbench::plot::fit::Polynomial;
    ///
    /// let xs = [1.0, 2.0, 3.0, 4.0];
    /// let ys = [3.0, 5.0, 7.0, 9.0];
    /// let line = Polynomial::fit(&xs, &ys, 1).unwrap();
    /// assert!((line.eval(10.0) - 21.0).abs() < 1e-9);
    /// ```
    pub fn fit(xs: &[f64], ys: &[f64], degree: usize) -> Option<Self> {
        let terms = degree + 1;
        if xs.len() != ys.len() || xs.len() < terms {
            return None;
        }

        let (min, max) = xs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let center = (min + max) / 2.0;
        let half_width = if max > min { (max - min) / 2.0 } else { 1.0 };

        // Normal equations: (V^T V) c = V^T y, with V the Vandermonde matrix
        let mut powers = vec![0.0; 2 * degree + 1];
        let mut rhs = vec![0.0; terms];
        for (&x, &y) in xs.iter().zip(ys) {
            let t = (x - center) / half_width;
            let mut p = 1.0;
            for (k, power) in powers.iter_mut().enumerate() {
                *power += p;
                if k < terms {
                    rhs[k] += p * y;
                }
                p *= t;
            }
        }

        let mut system: Vec<Vec<f64>> = (0..terms)
            .map(|row| {
                let mut equation = powers[row..row + terms].to_vec();
                equation.push(rhs[row]);
                equation
            })
            .collect();

        let coefficients = solve(&mut system)?;
        Some(Self {
            coefficients,
            center,
            half_width,
        })
    }

    pub fn eval(&self, x: f64) -> f64 {
        let t = (x - self.center) / self.half_width;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c)
    }
}

/// Gauss-Jordan elimination with partial pivoting over an augmented matrix
fn solve(system: &mut [Vec<f64>]) -> Option<Vec<f64>> {
    let n = system.len();
    let scale = system
        .iter()
        .flat_map(|row| row[..n].iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return None;
    }

    for col in 0..n {
        let pivot = (col..n).max_by(|&a, &b| {
            system[a][col]
                .abs()
                .total_cmp(&system[b][col].abs())
        })?;
        if system[pivot][col].abs() <= scale * 1e-12 {
            return None;
        }
        system.swap(col, pivot);

        let pivot_row = system[col].clone();
        for (row, equation) in system.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = equation[col] / pivot_row[col];
            if factor != 0.0 {
                for (value, pivot_value) in equation.iter_mut().zip(&pivot_row).skip(col) {
                    *value -= factor * pivot_value;
                }
            }
        }
    }

    Some((0..n).map(|row| system[row][n] / system[row][row]).collect())
}
