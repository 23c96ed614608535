//! Distance matrix loader.
//!
//! Reads a square matrix from delimited text. Cells are separated by `;`
//! when a line contains one, by whitespace otherwise. Text after `#` is a
//! comment.
//!
//! A first line that opens with an empty corner cell (`;A;B;...`) is a
//! header of location names, and then every data row starts with a label
//! cell, whatever its text. Without a corner cell the layout is inferred:
//! a first line with no numeric cells is a header, and a row whose first
//! cell is not numeric carries a label.
//!
//! ```text
//! ;Warsaw;Krakow;Gdansk
//! Warsaw;0;290;340
//! Krakow;290;0;590
//! Gdansk;340;590;0
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use crate::distance::DistanceMatrix;
use crate::error::TspError;

/// The error type for matrix loading.
#[derive(Debug)]
pub enum LoadError {
    /// An I/O error occurred while reading the input.
    Io(std::io::Error),
    /// A cell could not be parsed as a distance.
    Parse {
        line: usize,
        column: usize,
        value: String,
    },
    /// The header names a different number of locations than the matrix has.
    NameCountMismatch { names: usize, size: usize },
    /// The parsed rows do not form a valid matrix.
    Matrix(TspError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse {
                line,
                column,
                value,
            } => write!(
                f,
                "could not parse '{value}' as a distance (line {line}, column {column})"
            ),
            Self::NameCountMismatch { names, size } => write!(
                f,
                "header names {names} locations but the matrix has {size} rows"
            ),
            Self::Matrix(e) => write!(f, "invalid matrix: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Matrix(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<TspError> for LoadError {
    fn from(e: TspError) -> Self {
        Self::Matrix(e)
    }
}

/// A loaded matrix and the display names of its locations.
#[derive(Debug, Clone)]
pub struct LoadedMatrix {
    /// One name per location, aligned to matrix indices.
    pub names: Vec<String>,
    pub matrix: DistanceMatrix,
}

/// Loads a matrix from a file.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<LoadedMatrix, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

/// Parses a matrix from text.
///
/// Names come from the header if present, then from row labels if every row
/// has one, and default to the location indices otherwise.
///
/// # Examples
///
/// ```
/// use u_tsp::loader::parse_matrix;
///
/// let loaded = parse_matrix(";A;B\nA;0;7\nB;7;0\n").unwrap();
/// assert_eq!(loaded.names, vec!["A", "B"]);
/// assert_eq!(loaded.matrix.get(0, 1), 7.0);
/// ```
pub fn parse_matrix(text: &str) -> Result<LoadedMatrix, LoadError> {
    let mut header: Option<Vec<String>> = None;
    let mut labels: Vec<Option<String>> = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut labelled = false;

    let lines = text
        .lines()
        .enumerate()
        .map(|(k, raw)| (k + 1, strip_comment(raw)))
        .filter(|(_, line)| !line.trim().is_empty());

    for (line_no, line) in lines {
        let cells = split_cells(line);

        if header.is_none() && rows.is_empty() {
            let corner = line.contains(';') && cells.first().is_some_and(|c| c.is_empty());
            if corner || is_header(&cells) {
                labelled = corner;
                header = Some(
                    cells
                        .iter()
                        .filter(|c| !c.is_empty())
                        .map(|c| c.to_string())
                        .collect(),
                );
                continue;
            }
        }

        let mut values = Vec::with_capacity(cells.len());
        let mut label = None;
        for (col, cell) in cells.iter().enumerate() {
            if col == 0 && labelled {
                label = Some(cell.to_string());
                continue;
            }
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) if col == 0 => label = Some(cell.to_string()),
                Err(_) => {
                    return Err(LoadError::Parse {
                        line: line_no,
                        column: col + 1,
                        value: cell.to_string(),
                    })
                }
            }
        }
        labels.push(label);
        rows.push(values);
    }

    let matrix = DistanceMatrix::from_rows(rows)?;
    let size = matrix.size();

    let names = match header {
        Some(names) if names.len() != size => {
            return Err(LoadError::NameCountMismatch {
                names: names.len(),
                size,
            })
        }
        Some(names) => names,
        None if labels.iter().all(Option::is_some) => labels.into_iter().flatten().collect(),
        None => (0..size).map(|k| k.to_string()).collect(),
    };

    tracing::debug!(size, symmetric = matrix.is_symmetric(1e-9), "loaded distance matrix");
    Ok(LoadedMatrix { names, matrix })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(k) => &line[..k],
        None => line,
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    if line.contains(';') {
        line.split(';').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// A header has at least one non-empty cell and no numeric cells.
fn is_header(cells: &[&str]) -> bool {
    let mut named = cells.iter().filter(|c| !c.is_empty()).peekable();
    named.peek().is_some() && named.all(|c| c.parse::<f64>().is_err())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_labels() {
        let text = ";Warsaw;Krakow;Gdansk\n\
                    Warsaw;0;290;340\n\
                    Krakow;290;0;590\n\
                    Gdansk;340;590;0\n";
        let loaded = parse_matrix(text).expect("valid");
        assert_eq!(loaded.names, vec!["Warsaw", "Krakow", "Gdansk"]);
        assert_eq!(loaded.matrix.size(), 3);
        assert_eq!(loaded.matrix.get(1, 2), 590.0);
    }

    #[test]
    fn test_whitespace_without_header() {
        let loaded = parse_matrix("0 1 2\n1 0 3\n2 3 0\n").expect("valid");
        assert_eq!(loaded.names, vec!["0", "1", "2"]);
        assert_eq!(loaded.matrix.get(2, 1), 3.0);
    }

    #[test]
    fn test_row_labels_become_names() {
        let loaded = parse_matrix("a 0 4\nb 4 0\n").expect("valid");
        assert_eq!(loaded.names, vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_separator_and_comments() {
        let text = "# two cities\n;X;Y;\nX;0;1.5;\nY;1.5;0; # done\n";
        let loaded = parse_matrix(text).expect("valid");
        assert_eq!(loaded.names, vec!["X", "Y"]);
        assert_eq!(loaded.matrix.get(0, 1), 1.5);
    }

    #[test]
    fn test_bad_cell() {
        let err = parse_matrix("0;1\n1;x\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse { line: 2, column: 2, ref value } if value == "x"
        ));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = parse_matrix("0 1 2\n1 0\n2 3 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Matrix(TspError::NonSquareMatrix { row: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_matrix("\n\n").unwrap_err(),
            LoadError::Matrix(TspError::EmptyMatrix)
        ));
    }

    #[test]
    fn test_name_count_mismatch() {
        let err = parse_matrix(";A;B;C\n0;1\n1;0\n").unwrap_err();
        assert!(matches!(err, LoadError::NameCountMismatch { names: 3, size: 2 }));
    }

    #[test]
    fn test_numeric_names_with_corner_cell() {
        let loaded = parse_matrix(";1;2;3\n1;0;5;6\n2;5;0;7\n3;6;7;0\n").expect("valid");
        assert_eq!(loaded.names, vec!["1", "2", "3"]);
        assert_eq!(loaded.matrix.size(), 3);
        assert_eq!(loaded.matrix.get(0, 2), 6.0);
    }

    #[test]
    fn test_float_like_names_with_corner_cell() {
        let text = ";Nan;Lampang;Inf\n\
                    Nan;0;5;6\n\
                    Lampang;5;0;7\n\
                    Inf;6;7;0\n";
        let loaded = parse_matrix(text).expect("valid");
        assert_eq!(loaded.names, vec!["Nan", "Lampang", "Inf"]);
        assert_eq!(loaded.matrix.get(2, 1), 7.0);
    }

    #[test]
    fn test_corner_rows_always_drop_first_cell() {
        // row labels are skipped even when empty
        let loaded = parse_matrix(";A;B\n;0;2\n;2;0\n").expect("valid");
        assert_eq!(loaded.names, vec!["A", "B"]);
        assert_eq!(loaded.matrix.get(0, 1), 2.0);
    }

    #[test]
    fn test_whitespace_header_still_inferred() {
        let loaded = parse_matrix("A B\n0 3\n3 0\n").expect("valid");
        assert_eq!(loaded.names, vec!["A", "B"]);
        assert_eq!(loaded.matrix.get(1, 0), 3.0);
    }

    #[test]
    fn test_bundled_sample() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/poland.csv");
        let loaded = load_matrix(path).expect("sample loads");
        assert_eq!(loaded.names.len(), 5);
        assert_eq!(loaded.names[2], "Gdansk");
        assert!(loaded.matrix.is_symmetric(1e-9));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_matrix("/definitely/not/here.csv"),
            Err(LoadError::Io(_))
        ));
    }
}
