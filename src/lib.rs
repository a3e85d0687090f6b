pub mod catalogue;
pub mod exporter;
pub mod utils;
pub mod widget;

pub use exporter::{export, ExportError, WidgetExporter};
pub use widget::Widget;
