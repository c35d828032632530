use super::write_atomic;
use crate::error::ExportError;
use crate::model::QuoteSnapshot;
use std::path::Path;

/// Pretty-printed snapshot; loadable again with `load_quotation`.
pub fn render_json(snapshot: &QuoteSnapshot) -> Result<Vec<u8>, ExportError> {
    let mut json = serde_json::to_vec_pretty(snapshot)?;
    json.push(b'\n');
    Ok(json)
}

pub fn export_json<P: AsRef<Path>>(snapshot: &QuoteSnapshot, path: P) -> Result<(), ExportError> {
    let json = render_json(snapshot)?;
    write_atomic(path.as_ref(), &json)
}
