// File: crates/xyplot-core/src/codec.rs
// Summary: JSON encoding of the whole PlotData aggregate.

use crate::error::{PlotError, Result};
use crate::plot::PlotData;

pub fn encode(data: &PlotData) -> Result<Vec<u8>> {
    serde_json::to_vec(data).map_err(PlotError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<PlotData> {
    serde_json::from_slice(bytes).map_err(PlotError::Decode)
}
