use crate::models::RecordDiagnostic;
use std::io::{self, Write};

/// Writes one line per skipped row, in the order the rows were read.
pub fn write_diagnostics<W: Write>(
    diagnostics: &[RecordDiagnostic],
    mut output: W,
) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(output, "{}", diagnostic)?;
    }

    output.flush()
}
