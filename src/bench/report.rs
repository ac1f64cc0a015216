use crate::error::BenchError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str = "N,seconds";

/// Average cost of one generation on an N x N grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRecord {
    pub size: usize,
    pub seconds: f64,
}

/// Records in the order the sizes were measured (ascending N).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    records: Vec<BenchmarkRecord>,
}

impl ResultTable {
    pub fn new() -> ResultTable {
        ResultTable::default()
    }

    pub fn with_capacity(capacity: usize) -> ResultTable {
        ResultTable {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: BenchmarkRecord) {
        self.records.push(record)
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the `N,seconds` header followed by one row per record.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", CSV_HEADER)?;
        for BenchmarkRecord { size, seconds } in &self.records {
            writeln!(out, "{},{}", size, seconds)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BenchError> {
        let path = path.as_ref();
        let io_err = |source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        self.write_csv(BufWriter::new(file)).map_err(io_err)
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>8} {:>16}", "N", "seconds")?;
        writeln!(f, "{}", "-".repeat(25))?;
        for record in &self.records {
            writeln!(f, "{:>8} {:>16.9}", record.size, record.seconds)?;
        }
        Ok(())
    }
}
