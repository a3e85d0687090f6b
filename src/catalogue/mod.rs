use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::widget::Widget;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("can't read catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalogue json in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of widgets.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Widget>, CatalogueError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let widgets: Vec<Widget> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogueError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = widgets.len(), "catalogue loaded");
    Ok(widgets)
}

pub fn sample() -> Vec<Widget> {
    vec![
        Widget::new("ABC123", "Left-handed screwdriver", 499),
        Widget::new("DEF456", "Tartan paint", 1249),
    ]
}
