//! Dataset file loading.

use std::path::Path;

use tracing::info;

use crate::domain::Station;

use super::convert;
use super::error::DatasetError;
use super::types::BackendData;

/// Load and flatten the station dataset from a JSON file.
///
/// The file holds the grouped backend structure (see
/// [`super::types::BackendData`]). Group order in the file is preserved in
/// the returned list.
pub fn load_stations(path: &Path) -> Result<Vec<Station>, DatasetError> {
    let bytes = std::fs::read(path)?;
    let data: BackendData = serde_json::from_slice(&bytes)?;
    let stations = convert::flatten(&data);

    info!(
        path = %path.display(),
        groups = data.len(),
        stations = stations.len(),
        "loaded station dataset"
    );

    Ok(stations)
}
