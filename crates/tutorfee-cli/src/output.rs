//! CLI output formatting.

use std::io::{self, Write};

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the bare total to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, total: u64) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{total}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(17_000), "17,000");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn write_total_to_file() {
        let path = std::env::temp_dir().join(format!("tutorfee-output-{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        write_to_file(path_str, 18_000).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "18000");
        std::fs::remove_file(&path).unwrap();
    }
}
