use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::chp;
use crate::error::{Error, Result};
use crate::geopoint::FieldIndex;

/// Default field delimiter. The data sets this tool grew up on are
/// semicolon-separated; pass `delimiter(b',')` for plain CSV.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Default radius label substituted into each `PExt` line.
pub const DEFAULT_RADIUS: u32 = 10;

/// The transcoding core: one sequential read pass over a delimited point
/// source, one sequential write pass of six-line CHP blocks.
///
/// A `Converter` carries no state across calls; each conversion is
/// independent and may be repeated on the same paths.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    delimiter: u8,
    radius: u32,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Transcodes every record from `input` into `output` and returns how
    /// many records were written. The first row must be a header containing
    /// `Name`, `Latitude` and `Longitude` (any order, extra columns are
    /// ignored). A header with no data rows is a successful conversion of
    /// zero records.
    pub fn convert<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<u64> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(input);

        let fields = FieldIndex::resolve(reader.headers()?)?;

        let mut count = 0u64;
        for result in reader.records() {
            let record = result?;
            let point = fields.extract(&record);
            chp::write_point(&mut output, &point, self.radius, count + 1)?;
            count += 1;
        }

        output.flush()?;
        Ok(count)
    }

    /// Path-level wrapper around [`Converter::convert`]: rejects blank
    /// paths before touching the filesystem, opens the input for reading
    /// and the output for create-or-truncate.
    ///
    /// Rerunning with the same paths rewrites the output from scratch, so
    /// repeated conversions of identical input are byte-identical. On
    /// failure past the header, blocks already written stay on disk.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<u64> {
        if is_blank(input) || is_blank(output) {
            return Err(Error::EmptyPath);
        }

        let source = File::open(input).map_err(|source| Error::FileNotFound {
            path: input.to_path_buf(),
            source,
        })?;
        let sink = File::create(output).map_err(|source| Error::Write {
            path: output.to_path_buf(),
            source,
        })?;

        // Reader failures surface as Error::Csv, so a bare Io out of
        // convert() can only have come from the writer.
        self.convert(source, BufWriter::new(sink))
            .map_err(|err| match err {
                Error::Io(source) => Error::Write {
                    path: output.to_path_buf(),
                    source,
                },
                other => other,
            })
    }
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}
