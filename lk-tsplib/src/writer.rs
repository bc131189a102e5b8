#[cfg(test)]
#[path = "../tests/unit/writer_test.rs"]
mod writer_test;

use lk_core::models::Tour;
use lk_core::utils::GenericError;
use std::io::{BufWriter, Write};

/// A trait to write a tour in the TSPLIB tour format.
pub trait TsplibSolution<W: Write> {
    /// Writes the tour with one-based node indices.
    fn write_tsplib(&self, writer: &mut BufWriter<W>, name: &str) -> Result<(), GenericError>;
}

impl<W: Write> TsplibSolution<W> for Tour {
    fn write_tsplib(&self, writer: &mut BufWriter<W>, name: &str) -> Result<(), GenericError> {
        writeln!(writer, "NAME : {name}")?;
        writeln!(writer, "TYPE : TOUR")?;
        writeln!(writer, "DIMENSION : {}", self.dimension())?;
        writeln!(writer, "TOUR_SECTION")?;

        for node in self.nodes() {
            writeln!(writer, "{}", node + 1)?;
        }

        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;

        Ok(())
    }
}
