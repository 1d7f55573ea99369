use csv::StringRecord;

use crate::error::{Error, Result};

pub const NAME: &str = "Name";
pub const LATITUDE: &str = "Latitude";
pub const LONGITUDE: &str = "Longitude";

/// One named point taken from a single input row. Values stay textual and
/// reach the output verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geopoint<'a> {
    pub name: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
}

/// Column positions of the three required fields, resolved from the header
/// row once per conversion. Header matching is exact; when a name occurs
/// more than once, the last occurrence wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldIndex {
    name: usize,
    latitude: usize,
    longitude: usize,
}

impl FieldIndex {
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            name: find(headers, NAME)?,
            latitude: find(headers, LATITUDE)?,
            longitude: find(headers, LONGITUDE)?,
        })
    }

    /// Pulls the three named values out of a data record. A row shorter than
    /// the header resolves its absent fields to the empty string.
    pub fn extract<'a>(&self, record: &'a StringRecord) -> Geopoint<'a> {
        Geopoint {
            name: record.get(self.name).unwrap_or(""),
            latitude: record.get(self.latitude).unwrap_or(""),
            longitude: record.get(self.longitude).unwrap_or(""),
        }
    }
}

fn find(headers: &StringRecord, field: &'static str) -> Result<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == field)
        .map(|(i, _)| i)
        .last()
        .ok_or(Error::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn headers(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[rstest]
    fn test_resolve_any_order() {
        let index =
            FieldIndex::resolve(&headers(&["Longitude", "Name", "Latitude"])).unwrap();
        let record = StringRecord::from(vec!["37.6", "Alpha", "55.7"]);
        let point = index.extract(&record);
        assert_eq!(point.name, "Alpha");
        assert_eq!(point.latitude, "55.7");
        assert_eq!(point.longitude, "37.6");
    }

    #[rstest]
    #[case::no_name(&["Latitude", "Longitude"], "Name")]
    #[case::no_latitude(&["Name", "Longitude"], "Latitude")]
    #[case::no_longitude(&["Name", "Latitude"], "Longitude")]
    #[case::empty_header(&[], "Name")]
    #[case::case_sensitive(&["name", "Latitude", "Longitude"], "Name")]
    fn test_missing_field(#[case] fields: &[&str], #[case] missing: &str) {
        match FieldIndex::resolve(&headers(fields)) {
            Err(Error::MissingField { field }) => assert_eq!(field, missing),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[rstest]
    fn test_duplicate_header_last_wins() {
        let index =
            FieldIndex::resolve(&headers(&["Name", "Name", "Latitude", "Longitude"]))
                .unwrap();
        let record = StringRecord::from(vec!["first", "second", "1.0", "2.0"]);
        assert_eq!(index.extract(&record).name, "second");
    }

    #[rstest]
    fn test_short_row_resolves_empty() {
        let index =
            FieldIndex::resolve(&headers(&["Name", "Latitude", "Longitude"])).unwrap();
        let record = StringRecord::from(vec!["Alpha"]);
        let point = index.extract(&record);
        assert_eq!(point.name, "Alpha");
        assert_eq!(point.latitude, "");
        assert_eq!(point.longitude, "");
    }
}
