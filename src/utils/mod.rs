use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use serde::Serialize;
use std::io::Write;

/// Builds a CSV writer that leaves the header to the caller, so the header
/// row is written even when there are no records.
pub fn writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

pub fn write<W, T>(inner: W, header: &[&str], records: &[T]) -> csv::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut wtr = writer(inner);

    wtr.write_record(header)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}
