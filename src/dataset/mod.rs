mod error;
mod record;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use record::AvgColorRecord;

use crate::color::ColorSample;
use log::info;
use std::fs;
use std::path::Path;

/// Where the average-color script writes its JSON output
pub const DEFAULT_DATASET_PATH: &str = "outputs/avg_colors.json";

/// Where the thumbnail script writes its images
pub const DEFAULT_THUMBNAIL_DIR: &str = "outputs/thumbnails";

/// Parse an average-color JSON array into samples, keeping record order
pub fn parse_samples(json: &str) -> Result<Vec<ColorSample>, LoadError> {
    let records: Vec<AvgColorRecord> = serde_json::from_str(json)?;
    records.into_iter().map(ColorSample::try_from).collect()
}

/// Read and parse an average-color JSON file
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<ColorSample>, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let samples = parse_samples(&json)?;
    info!("loaded {} color samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Thumbnail location for a source image file name
pub fn thumbnail_path(thumbnail_dir: &str, file: &str) -> String {
    let dir = thumbnail_dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
