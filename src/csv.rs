use crate::domain::*;
use crate::error::Result;
use std::io::prelude::*;

/// One line per grid row, values comma separated.
pub fn write_csv_2d<W: Write>(domain: &OwnedDomain<2>, output: &mut W) -> Result<()> {
    for r in 0..domain.aabb().rows() {
        let row = domain.row(r);
        write!(output, "{}", row[0])?;
        for v in &row[1..] {
            write!(output, ", {v}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_csv_2d_file<P: AsRef<std::path::Path>>(
    domain: &OwnedDomain<2>,
    path: &P,
) -> Result<()> {
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv_2d(domain, &mut output)?;
    output.flush()?;
    Ok(())
}
