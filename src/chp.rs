use std::io::Write;

use crate::error::{Error, Result};
use crate::geopoint::{Geopoint, LATITUDE, LONGITUDE, NAME};

/// Lines emitted per point. The consuming application counts on exactly this
/// many per block, with no separator between blocks.
pub const LINES_PER_POINT: usize = 6;

/// Writes the six-line CHP block for one point. The point is validated as a
/// whole before the first line goes out, so a rejected point contributes
/// nothing to the output.
pub fn write_point(
    writer: &mut dyn Write,
    point: &Geopoint<'_>,
    radius: u32,
    record: u64,
) -> Result<()> {
    ensure_representable(point, record)?;

    writeln!(writer, "Name=\"{}\"", point.name)?;
    writeln!(writer, "Add1=0,0")?;
    writeln!(writer, "Add2=0,0")?;
    writeln!(writer, "Add3=0,0")?;
    writeln!(
        writer,
        "PExt=({} {} R{})",
        point.latitude, point.longitude, radius
    )?;
    writeln!(writer, "Prms=0,0")?;

    Ok(())
}

/// CHP has no escape syntax: a quote inside Name would terminate the quoted
/// value early, and a line break inside any field would split its line.
fn ensure_representable(point: &Geopoint<'_>, record: u64) -> Result<()> {
    if point.name.contains('"') {
        return Err(Error::Unrepresentable {
            record,
            field: NAME,
        });
    }
    for (field, value) in [
        (NAME, point.name),
        (LATITUDE, point.latitude),
        (LONGITUDE, point.longitude),
    ] {
        if value.contains(['\r', '\n']) {
            return Err(Error::Unrepresentable { record, field });
        }
    }
    Ok(())
}
