use std::path::Path;

use crate::error::CastnetError;
use crate::models::{InteractionNetwork, TranscriptRow};

/// Read ordered transcript rows from a CSV file.
///
/// The file must carry `title` and `pony` columns; any other columns are
/// ignored. Row order is preserved since adjacency is positional. A row that
/// cannot be decoded is fatal: skipping it would silently change which
/// speakers end up adjacent.
pub fn read_transcript_csv(path: &Path) -> Result<Vec<TranscriptRow>, CastnetError> {
    let file = std::fs::File::open(path).map_err(|source| CastnetError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<TranscriptRow>().enumerate() {
        let row = record.map_err(|err| CastnetError::MalformedRow {
            // 1-based, line 1 is the header
            line: index + 2,
            message: err.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load a previously built interaction network from JSON.
pub fn load_network(path: &Path) -> Result<InteractionNetwork, CastnetError> {
    let content = std::fs::read_to_string(path).map_err(|source| CastnetError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
