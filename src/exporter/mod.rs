use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::utils;
use crate::widget::Widget;

pub const HEADER: [&str; 3] = ["Code", "Name", "Price"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write widgets to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Writes widgets as `Code,Name,Price` rows behind a fixed header line.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidgetExporter;

impl WidgetExporter {
    pub fn new() -> Self {
        WidgetExporter
    }

    /// Creates or truncates `path` and writes every widget in input order.
    /// A failure part way through may leave a partially written file.
    pub fn export<P: AsRef<Path>>(&self, widgets: &[Widget], path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), count = widgets.len(), "exporting widgets");

        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.write_to(widgets, file)
            .map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), count = widgets.len(), "widgets exported");
        Ok(())
    }

    pub fn write_to<W: Write>(&self, widgets: &[Widget], writer: W) -> io::Result<()> {
        utils::write(writer, &HEADER, widgets).map_err(csv_to_io)
    }
}

pub fn export<P: AsRef<Path>>(widgets: &[Widget], path: P) -> Result<()> {
    WidgetExporter::new().export(widgets, path)
}

fn csv_to_io(err: csv::Error) -> io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(err) => err,
        other => io::Error::other(format!("{:?}", other)),
    }
}
