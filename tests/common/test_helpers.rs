//! Helper functions for integration tests

use std::io::Write;

use tempfile::NamedTempFile;

/// Compute relative error
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Write a `timestamp;signal` trace with a header line to a temporary file
pub fn write_trace(points: &[(f64, f64)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "time;signal").unwrap();
    for (t, signal) in points {
        writeln!(file, "{};{}", t, signal).unwrap();
    }
    file.flush().unwrap();
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-12);
        assert!((relative_error(-2.0, -4.0) - 0.5).abs() < 1e-12);
        assert_eq!(relative_error(1e-12, 0.0), 1e-12);
    }
}
