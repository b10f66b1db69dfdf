// File: crates/sales-core/src/scale.rs
// Summary: Band (categorical X) and linear (value) scales with nice domains and tick generation.

/// Categorical scale dividing a pixel range into evenly spaced bands.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Lay out `domain` over `[range_start, range_end]`; `padding` is used for
    /// both the inner gaps and the outer edges, bands are centred.
    pub fn new(domain: Vec<String>, range_start: f64, range_end: f64, padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let span = range_end - range_start;
        let step = span / (n - padding + padding * 2.0).max(1.0);
        let start = range_start + (span - step * (n - padding)) * 0.5;
        Self { domain, start, step, bandwidth: step * (1.0 - padding) }
    }

    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }
    pub fn domain(&self) -> &[String] { &self.domain }

    /// Left edge of the band for `key`, or `None` when it is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Centre of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth * 0.5)
    }
}

/// Linear mapping from a value domain to a pixel range (range may be inverted).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        let mut s = Self { d0, d1, r0, r1 };
        if !(s.d1 - s.d0).is_finite() || (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    /// Scale over `[0, max]` extended to round tick boundaries.
    pub fn zero_based(max: f64, r0: f64, r1: f64) -> Self {
        Self::new(0.0, max.max(0.0), r0, r1).nice(10)
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Extend the domain outward so both ends land on a tick step.
    pub fn nice(mut self, count: usize) -> Self {
        let mut prev = 0.0;
        for _ in 0..10 {
            let step = tick_step(self.d0, self.d1, count);
            if step == prev || step <= 0.0 { break; }
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
            prev = step;
        }
        self
    }

    /// Roughly `count` round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        let step = tick_step(lo, hi, count);
        if step <= 0.0 || !step.is_finite() { return vec![lo]; }
        let i0 = (lo / step - 1e-9).ceil() as i64;
        let i1 = (hi / step + 1e-9).floor() as i64;
        // multiply (not accumulate) so errors do not drift
        (i0..=i1).map(|i| clean(i as f64 * step)).collect()
    }
}

/// Tick spacing of 1, 2, 5 or 10 times a power of ten giving about `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() { return 0.0; }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

fn clean(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_scale_matches_padding_layout() {
        let s = BandScale::new(vec!["a".into(), "b".into()], 0.0, 210.0, 0.1);
        // step = 210 / (2 - 0.1 + 0.2) = 100
        assert!((s.step() - 100.0).abs() < 1e-9);
        assert!((s.bandwidth() - 90.0).abs() < 1e-9);
        assert!((s.position("a").unwrap() - 10.0).abs() < 1e-9);
        assert!((s.position("b").unwrap() - 110.0).abs() < 1e-9);
        assert!(s.position("c").is_none());
    }

    #[test]
    fn nice_rounds_domain_outward() {
        let s = LinearScale::new(0.0, 97.0, 100.0, 0.0).nice(10);
        assert_eq!(s.d1, 100.0);
        let s = LinearScale::new(0.0, 1234.0, 0.0, 1.0).nice(10);
        assert_eq!(s.d1, 1300.0);
    }

    #[test]
    fn ticks_are_round_values() {
        let s = LinearScale::new(0.0, 1.0, 0.0, 100.0);
        let t = s.ticks(5);
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let s = LinearScale::zero_based(0.0, 300.0, 0.0);
        assert!(s.d1 > s.d0);
        assert_eq!(s.map(0.0), 300.0);
    }
}
