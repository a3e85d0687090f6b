use serde::{Deserialize, Serialize};

/// A single exportable record. Serde names match the export header columns,
/// with lower case aliases so catalogue JSON can use plain field names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Widget {
    #[serde(rename = "Code", alias = "code")]
    pub code: String,

    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    /// Minor currency units, e.g. cents.
    #[serde(rename = "Price", alias = "price")]
    pub price: i64,
}

impl Widget {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}
