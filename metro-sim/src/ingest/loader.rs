//! File loading and row splitting.

use std::fs;
use std::path::PathBuf;

/// Error returned when a source file cannot be read.
#[derive(Debug, thiserror::Error)]
#[error("could not read {path}: {source}")]
pub struct LoadError {
    path: String,
    source: std::io::Error,
}

/// Read a source file into its lines.
///
/// A `.txt` extension is appended when the name doesn't already carry one,
/// so users can type `stations` for `stations.txt`.
///
/// # Errors
///
/// Returns `LoadError` if the file does not exist or cannot be read.
pub fn read_lines(name: &str) -> Result<Vec<String>, LoadError> {
    let path = if name.ends_with(".txt") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.txt"))
    };

    let contents = fs::read_to_string(&path).map_err(|source| LoadError {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents.lines().map(str::to_string).collect())
}

/// Split connection source lines into raw comma-delimited rows.
///
/// Lines starting with `#` are comments and excluded before the rows reach
/// the validators.
pub fn connection_rows(lines: &[String]) -> Vec<Vec<String>> {
    lines
        .iter()
        .filter(|line| !line.starts_with('#'))
        .map(|line| split_row(line))
        .collect()
}

/// Split station delay source lines into raw comma-delimited rows.
pub fn station_rows(lines: &[String]) -> Vec<Vec<String>> {
    lines.iter().map(|line| split_row(line)).collect()
}

fn split_row(line: &str) -> Vec<String> {
    line.trim().split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn read_lines_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connections.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "A,B,Red,N").unwrap();
        writeln!(file, "B,C,Red,N").unwrap();

        let result = read_lines(path.to_str().unwrap()).unwrap();
        assert_eq!(result, vec!["A,B,Red,N", "B,C,Red,N"]);
    }

    #[test]
    fn read_lines_appends_txt_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.txt");
        fs::write(&path, "A,0.1\n").unwrap();

        let bare = dir.path().join("stations");
        let result = read_lines(bare.to_str().unwrap()).unwrap();
        assert_eq!(result, vec!["A,0.1"]);
    }

    #[test]
    fn read_lines_reports_missing_file() {
        let err = read_lines("/no/such/file.txt").unwrap_err();
        assert!(err.to_string().contains("/no/such/file.txt"));
    }

    #[test]
    fn connection_rows_skip_comments() {
        let rows = connection_rows(&lines(&[
            "# header comment",
            "A,B,Red,N",
            "#A,C,Red,N",
            "B,C,Red,N",
        ]));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["A", "B", "Red", "N"]);
        assert_eq!(rows[1], vec!["B", "C", "Red", "N"]);
    }

    #[test]
    fn station_rows_keep_all_lines() {
        let rows = station_rows(&lines(&["A,0.1", "#not a comment here", "B,0.2"]));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["A", "0.1"]);
        assert_eq!(rows[1], vec!["#not a comment here"]);
        assert_eq!(rows[2], vec!["B", "0.2"]);
    }

    #[test]
    fn rows_are_trimmed_before_splitting() {
        let rows = station_rows(&lines(&["  A,0.1  "]));
        assert_eq!(rows[0], vec!["A", "0.1"]);
    }

    #[test]
    fn empty_input_yields_empty_rows() {
        assert!(connection_rows(&[]).is_empty());
        assert!(station_rows(&[]).is_empty());
    }
}
