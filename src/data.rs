use crate::errors::TreeError;

/// Parse a cell as a number, reporting the row and column on failure.
#[inline]
pub fn parse_cell(value: &str, row: usize, col: usize) -> Result<f64, TreeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| TreeError::ParseError(value.to_string(), row, col))
}

/// An ordered collection of string-valued records beneath a header row.
///
/// Row indices in errors count records only, the header is never included.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from raw rows.
    ///
    /// The first row is taken as the header. Every record must have the same
    /// number of cells as the header. A dataset holding nothing but a header
    /// is valid, split sides can end up empty.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, TreeError> {
        let width = match rows.first() {
            Some(header) => header.len(),
            None => return Err(TreeError::MissingHeader),
        };
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != width {
                return Err(TreeError::RaggedRow(i - 1, width, row.len()));
            }
        }
        Ok(Dataset { rows })
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Number of columns in the header.
    pub fn n_columns(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of records beneath the header.
    pub fn n_records(&self) -> usize {
        self.rows.len() - 1
    }

    /// The records beneath the header.
    pub fn records(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Cell content of a record, record 0 being the first row beneath the header.
    pub fn cell(&self, record: usize, col: usize) -> Option<&str> {
        self.rows
            .get(record + 1)
            .and_then(|r| r.get(col))
            .map(|c| c.as_str())
    }

    /// Parse the cell of a record as a number.
    pub fn numeric(&self, record: usize, col: usize) -> Result<f64, TreeError> {
        parse_cell(&self.rows[record + 1][col], record, col)
    }

    /// Position of a named column in the header.
    pub fn column_index(&self, name: &str) -> Result<usize, TreeError> {
        self.header()
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TreeError::UnknownFeature(name.to_string()))
    }

    /// New dataset holding the header and the records at the given positions.
    pub fn select_records(&self, index: &[usize]) -> Dataset {
        let mut rows = Vec::with_capacity(index.len() + 1);
        rows.push(self.rows[0].clone());
        for i in index {
            rows.push(self.rows[i + 1].clone());
        }
        Dataset { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[&[&str]]) -> Dataset {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        Dataset::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_requires_header() {
        let err = Dataset::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(err, TreeError::MissingHeader));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string()],
        ];
        let err = Dataset::from_rows(rows).unwrap_err();
        match err {
            TreeError::RaggedRow(row, expected, found) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_header_and_records() {
        let data = dataset(&[&["A", "B"], &["1", "2"], &["3", "4"]]);
        assert_eq!(data.header(), &["A".to_string(), "B".to_string()]);
        assert_eq!(data.n_columns(), 2);
        assert_eq!(data.n_records(), 2);
        assert_eq!(data.records().len(), 2);
        assert_eq!(data.cell(1, 0), Some("3"));
        assert_eq!(data.cell(2, 0), None);
    }

    #[test]
    fn test_header_only_dataset_is_valid() {
        let data = dataset(&[&["A", "B"]]);
        assert_eq!(data.n_records(), 0);
        assert!(data.records().is_empty());
    }

    #[test]
    fn test_numeric_parses_and_reports_position() {
        let data = dataset(&[&["A", "B"], &["1.5", " 2 "], &["x", "4"]]);
        assert_eq!(data.numeric(0, 0).unwrap(), 1.5);
        assert_eq!(data.numeric(0, 1).unwrap(), 2.0);
        match data.numeric(1, 0).unwrap_err() {
            TreeError::ParseError(value, row, col) => {
                assert_eq!(value, "x");
                assert_eq!(row, 1);
                assert_eq!(col, 0);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_column_index() {
        let data = dataset(&[&["A", "B"], &["1", "2"]]);
        assert_eq!(data.column_index("B").unwrap(), 1);
        let err = data.column_index("C").unwrap_err();
        assert!(matches!(err, TreeError::UnknownFeature(name) if name == "C"));
    }

    #[test]
    fn test_select_records_keeps_header() {
        let data = dataset(&[&["A"], &["1"], &["2"], &["3"]]);
        let picked = data.select_records(&[2, 0]);
        assert_eq!(picked.header(), data.header());
        assert_eq!(picked.n_records(), 2);
        assert_eq!(picked.cell(0, 0), Some("3"));
        assert_eq!(picked.cell(1, 0), Some("1"));
    }
}
