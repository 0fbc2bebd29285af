use std::path::PathBuf;
use std::sync::Arc;

use oedipus_core::model::Content;
use tracing::{debug, info};

use crate::error::ContentError;

/// The dataset compiled into the binary.
pub const BUNDLED_CONTENT: &str = include_str!("../content/oedipus.json");

/// Where the content dataset comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentSource {
    #[default]
    Bundled,
    File(PathBuf),
}

/// Parse and validate a JSON content document.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed JSON and
/// `ContentError::Invalid` when the dataset breaks a structural invariant.
pub fn parse_content(raw: &str) -> Result<Content, ContentError> {
    let content: Content = serde_json::from_str(raw)?;
    content.validate()?;
    debug!(
        chapters = content.story.len(),
        characters = content.characters.len(),
        entries = content.catalog.len(),
        "content parsed"
    );
    Ok(content)
}

/// Load the dataset once for the lifetime of the process.
///
/// # Errors
///
/// Returns `ContentError` if the file cannot be read, parsed, or validated.
pub fn load_content(source: &ContentSource) -> Result<Arc<Content>, ContentError> {
    let content = match source {
        ContentSource::Bundled => parse_content(BUNDLED_CONTENT)?,
        ContentSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;
            parse_content(&raw)?
        }
    };
    info!(source = ?source, "content loaded");
    Ok(Arc::new(content))
}
