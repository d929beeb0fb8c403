//! Flat-file loader for runner-results data.
//!
//! Parses the comma-separated race-results format: one record per line with
//! six fields (name, gender, age, division, country, overall time). The
//! loaded dataset holds one index-aligned column per field and is never
//! mutated after construction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{StatError, StatResult};

/// Numeric column selector for histogram rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataField {
    /// Runner age in years.
    Age,
    /// Overall finish time.
    Time,
}

impl FromStr for DataField {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(Self::Age),
            "time" => Ok(Self::Time),
            other => Err(StatError::config(format!(
                "unknown data field '{other}' (expected 'age' or 'time')"
            ))),
        }
    }
}

/// Race-results dataset: six equal-length, index-aligned columns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RaceDataset {
    /// Runner names.
    pub name: Vec<String>,
    /// Runner genders.
    pub gender: Vec<String>,
    /// Runner ages in years.
    pub age: Vec<u32>,
    /// Division numbers.
    pub division: Vec<u32>,
    /// Country codes.
    pub country: Vec<String>,
    /// Overall finish times.
    pub time: Vec<f64>,
}

impl RaceDataset {
    /// Load a dataset from the comma-separated results file at `path`.
    ///
    /// Reads line-by-line to end of file; no header row is assumed. The
    /// trailing line terminator is stripped before numeric conversion.
    ///
    /// # Errors
    ///
    /// Returns [`StatError::Io`] if the file cannot be read and
    /// [`StatError::Parse`] on a wrong field count or non-numeric
    /// age/division/time field.
    pub fn load<P: AsRef<Path>>(path: P) -> StatResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut dataset = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            dataset.push_record(idx + 1, &line)?;
        }
        Ok(dataset)
    }

    /// Parse one record and append it to every column.
    fn push_record(&mut self, line_no: usize, line: &str) -> StatResult<()> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return Err(StatError::parse(
                line_no,
                format!("expected 6 fields, found {}", fields.len()),
            ));
        }

        let age: u32 = fields[2]
            .parse()
            .map_err(|e| StatError::parse(line_no, format!("age '{}': {e}", fields[2])))?;
        let division: u32 = fields[3]
            .parse()
            .map_err(|e| StatError::parse(line_no, format!("division '{}': {e}", fields[3])))?;
        // trim_end covers a carriage return left by CRLF files; the newline
        // itself is already consumed by the line reader.
        let time: f64 = fields[5]
            .trim_end()
            .parse()
            .map_err(|e| StatError::parse(line_no, format!("time '{}': {e}", fields[5])))?;

        self.name.push(fields[0].to_string());
        self.gender.push(fields[1].to_string());
        self.age.push(age);
        self.division.push(division);
        self.country.push(fields[4].to_string());
        self.time.push(time);
        Ok(())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.name.len()
    }

    /// Check if the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Extract a numeric column as f64 values for statistics and plotting.
    #[must_use]
    pub fn column(&self, field: DataField) -> Vec<f64> {
        match field {
            DataField::Age => self.age.iter().map(|&a| f64::from(a)).collect(),
            DataField::Time => self.time.clone(),
        }
    }
}
