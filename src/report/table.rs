use super::ReportError;
use crate::bench::Measurement;
use std::collections::BTreeMap;
use std::io::Write;

/// One table row, indexed by column name.
pub type Record = BTreeMap<String, String>;

/// Column names of the csv format.
pub const COLUMNS: [&str; 6] =
    ["run", "variant", "count", "initial_size", "final_size", "millis"];

/// Table with named columns, written as separated values.
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(colnames: Vec<String>) -> Self {
        Self {
            header: colnames,
            rows: Vec::new(),
        }
    }

    /// Empty table with the [`COLUMNS`] of the csv format.
    pub fn measurements() -> Self {
        Self::new(COLUMNS.iter().map(|c| c.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a record holding exactly one value per column.
    pub fn push(&mut self, mut record: Record) -> Result<(), ReportError> {
        if record.len() != self.header.len() {
            return Err(ReportError::InvalidNumberOfFields(record.len()));
        }
        let row = self
            .header
            .iter()
            .map(|name| {
                record
                    .remove(name)
                    .ok_or_else(|| ReportError::MissingField(name.clone()))
            })
            .collect::<Result<Vec<String>, ReportError>>()?;
        self.rows.push(row);
        Ok(())
    }

    /// Append the row of measurement `m` from repetition `run`.
    ///
    /// Fails if the table was not built with the [`COLUMNS`] names.
    pub fn push_measurement(
        &mut self,
        run: usize,
        m: &Measurement,
    ) -> Result<(), ReportError> {
        let values = [
            run.to_string(),
            m.variant.label().to_string(),
            m.count.to_string(),
            m.initial_size.to_string(),
            m.final_size.to_string(),
            m.millis().to_string(),
        ];
        let record: Record = COLUMNS
            .iter()
            .map(|c| c.to_string())
            .zip(values)
            .collect();
        self.push(record)
    }

    /// Write the header line followed by the rows.
    pub fn write<W: Write + ?Sized>(
        &self,
        output: &mut W,
        separator: &str,
    ) -> Result<(), ReportError> {
        writeln!(output, "{}", self.header.join(separator))?;
        for row in self.rows.iter() {
            writeln!(output, "{}", row.join(separator))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, Table};
    use crate::bench::{Measurement, Variant};
    use crate::report::ReportError;
    use std::time::Duration;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn table() -> Table {
        Table::new(vec![String::from("b"), String::from("a")])
    }

    #[test]
    fn test_write_in_header_order() {
        let mut t = table();
        t.push(record(&[("a", "1"), ("b", "2")])).unwrap();
        t.push(record(&[("a", "3"), ("b", "4")])).unwrap();
        assert_eq!(t.len(), 2);

        let mut out = Vec::new();
        t.write(&mut out, ";").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "b;a\n2;1\n4;3\n");
    }

    #[test]
    fn test_invalid_records() {
        let mut t = table();
        assert!(matches!(
            t.push(record(&[("a", "1")])),
            Err(ReportError::InvalidNumberOfFields(1))
        ));
        match t.push(record(&[("a", "1"), ("c", "2")])) {
            Err(ReportError::MissingField(name)) => assert_eq!(name, "b"),
            _ => panic!("Expected a missing field"),
        }
        assert!(t.is_empty());
    }

    #[test]
    fn test_measurement_rows() {
        let m = Measurement {
            variant: Variant::PreallocatedVector,
            count: 10,
            initial_size: 10,
            final_size: 20,
            elapsed: Duration::from_micros(2500),
        };
        let mut t = Table::measurements();
        t.push_measurement(3, &m).unwrap();

        let mut out = Vec::new();
        t.write(&mut out, ",").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "run,variant,count,initial_size,final_size,millis\n\
             3,Preallocated Vector,10,10,20,2\n"
        );
    }

    #[test]
    fn test_measurement_needs_csv_columns() {
        let m = Measurement {
            variant: Variant::List,
            count: 1,
            initial_size: 0,
            final_size: 1,
            elapsed: Duration::ZERO,
        };
        let mut t = table();
        assert!(matches!(
            t.push_measurement(0, &m),
            Err(ReportError::InvalidNumberOfFields(6))
        ));
        assert!(t.is_empty());
    }
}
