use std::fs;
use std::path::Path;

use vokabel_model::Lexicon;

use crate::error::SourceError;

/// Load a JSON lexicon profile. Fields the profile leaves out keep
/// their defaults.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lexicon: Lexicon = serde_json::from_str(&contents).map_err(|e| SourceError::Lexicon {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    lexicon.validate().map_err(|e| SourceError::Lexicon {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        path = %path.display(),
        navigation = lexicon.navigation.len(),
        footer_markers = lexicon.footer_markers.len(),
        "Loaded lexicon profile"
    );
    Ok(lexicon)
}
