//! Scoring.
//!
//! score = formal / minutes * (formal / actual) * 10, i.e. accepted
//! keystrokes per minute weighted by accuracy.

use std::time::Duration;

/// Accepted keystrokes over attempted keystrokes.
pub fn accuracy(formal: usize, actual: usize) -> Option<f64> {
    if actual == 0 {
        return None;
    }
    Some(formal as f64 / actual as f64)
}

/// `None` if nothing was typed or no time elapsed.
pub fn score(formal: usize, actual: usize, elapsed: Duration) -> Option<f64> {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return None;
    }
    let acc = accuracy(formal, actual)?;
    Some(formal as f64 / minutes * acc * 10.0)
}

pub fn keystrokes_per_second(formal: usize, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    (secs > 0.0).then(|| formal as f64 / secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_minute() {
        let s = score(300, 300, Duration::from_secs(60)).unwrap();
        assert!((s - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn mistakes_lower_the_score() {
        let clean = score(100, 100, Duration::from_secs(30)).unwrap();
        let sloppy = score(100, 125, Duration::from_secs(30)).unwrap();
        assert!((sloppy - clean * 0.8).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(score(0, 0, Duration::from_secs(10)), None);
        assert_eq!(score(10, 10, Duration::ZERO), None);
        assert_eq!(accuracy(3, 4), Some(0.75));
        assert_eq!(keystrokes_per_second(10, Duration::from_secs(2)), Some(5.0));
    }
}
