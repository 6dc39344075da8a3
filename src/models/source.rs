//! Source record access
//!
//! Looks up MyFoodData columns by header name.

use std::collections::HashMap;

use csv::StringRecord;

/// Column index of the source header row
#[derive(Debug, Clone, Default)]
pub struct SourceColumns {
    index: HashMap<String, usize>,
}

impl SourceColumns {
    /// Index a header row. A repeated header name resolves to its last column.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        Self { index }
    }

    /// Whether the header has a column named `column`
    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// View a data record through this header
    pub fn row<'a>(&'a self, record: &'a StringRecord) -> SourceRow<'a> {
        SourceRow {
            columns: self,
            record,
        }
    }
}

/// One source record keyed by header name
#[derive(Debug, Clone, Copy)]
pub struct SourceRow<'a> {
    columns: &'a SourceColumns,
    record: &'a StringRecord,
}

impl<'a> SourceRow<'a> {
    /// Raw value of `column`, or None if the header lacks it or the row is short
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let i = *self.columns.index.get(column)?;
        self.record.get(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_header_name() {
        let headers = StringRecord::from(vec!["Name", "Calories"]);
        let columns = SourceColumns::from_headers(&headers);
        let record = StringRecord::from(vec!["Apple", "52"]);
        let row = columns.row(&record);

        assert_eq!(row.get("Name"), Some("Apple"));
        assert_eq!(row.get("Calories"), Some("52"));
        assert_eq!(row.get("Fat (g)"), None);
    }

    #[test]
    fn test_short_row_is_absent() {
        let headers = StringRecord::from(vec!["Name", "Calories", "Fat (g)"]);
        let columns = SourceColumns::from_headers(&headers);
        let record = StringRecord::from(vec!["Apple"]);

        assert_eq!(columns.row(&record).get("Fat (g)"), None);
    }

    #[test]
    fn test_duplicate_header_uses_last_column() {
        let headers = StringRecord::from(vec!["Name", "Calories", "Calories"]);
        let columns = SourceColumns::from_headers(&headers);
        let record = StringRecord::from(vec!["Apple", "1", "2"]);

        assert!(columns.contains("Calories"));
        assert_eq!(columns.row(&record).get("Calories"), Some("2"));
    }
}
