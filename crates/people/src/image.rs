use serde::Serialize;

/// Metadata reported for an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSummary {
    #[serde(rename = "Filename")]
    pub filename: Option<String>,
    #[serde(rename = "Format")]
    pub format: Option<String>,
    #[serde(rename = "Size(kb)")]
    pub size_kb: f64,
}

impl ImageSummary {
    pub fn measure(filename: Option<String>, format: Option<String>, content: &[u8]) -> Self {
        Self {
            filename,
            format,
            size_kb: size_in_kb(content.len()),
        }
    }
}

/// Size in kilobytes (1024 bytes), rounded to two decimals.
pub fn size_in_kb(len: usize) -> f64 {
    (len as f64 / 1024.0 * 100.0).round() / 100.0
}
