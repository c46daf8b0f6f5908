//! Reading documents from disk

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analyzer::document::Document;
use crate::error::{HashtagError, Result};

/// What to do when a document cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadPolicy {
    /// fail the whole run on the first unreadable document
    #[default]
    Abort,
    /// log a warning and leave the document out
    Skip,
}

/// Read one document
/// The name is the path as given. Invalid UTF-8 is replaced, not rejected.
pub fn read_document(path: &Path) -> Result<Document> {
    let name = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| HashtagError::Io {
        document: name.clone(),
        source,
    })?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(document = %name, "document is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(Document::new(name, text))
}

/// Read every document in order, applying `policy` to read failures
pub fn load_documents<P: AsRef<Path>>(paths: &[P], policy: ReadPolicy) -> Result<Vec<Document>> {
    if paths.is_empty() {
        return Err(HashtagError::invalid_argument("no documents given"));
    }
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match read_document(path.as_ref()) {
            Ok(doc) => documents.push(doc),
            Err(err) if policy == ReadPolicy::Skip => warn!("skipping document: {err}"),
            Err(err) => return Err(err),
        }
    }
    if documents.is_empty() {
        return Err(HashtagError::invalid_argument("none of the documents could be read"));
    }
    info!(loaded = documents.len(), requested = paths.len(), "loaded documents");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_in_order_with_path_names() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "Alpha.").unwrap();
        fs::write(&b, "Beta.").unwrap();

        let docs = load_documents(&[&b, &a], ReadPolicy::Abort).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(&*docs[0].name, b.display().to_string());
        assert_eq!(docs[1].text, "Alpha.");
    }

    #[test]
    fn abort_reports_the_missing_document() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "Alpha.").unwrap();
        let missing = dir.path().join("missing.txt");

        let err = load_documents(&[&a, &missing], ReadPolicy::Abort).unwrap_err();
        match err {
            HashtagError::Io { document, .. } => assert!(document.ends_with("missing.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn skip_leaves_unreadable_documents_out() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "Alpha.").unwrap();
        let missing = dir.path().join("missing.txt");

        let docs = load_documents(&[&missing, &a], ReadPolicy::Skip).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].text, "Alpha.");

        let err = load_documents(&[&missing], ReadPolicy::Skip).unwrap_err();
        assert!(matches!(err, HashtagError::InvalidArgument { .. }));
    }

    #[test]
    fn empty_path_list_is_invalid() {
        let paths: [&Path; 0] = [];
        assert!(matches!(
            load_documents(&paths, ReadPolicy::Abort),
            Err(HashtagError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("latin1.txt");
        fs::write(&a, b"caf\xe9 ok.").unwrap();
        let doc = read_document(&a).unwrap();
        assert!(doc.text.starts_with("caf"));
        assert!(doc.text.ends_with(" ok."));
    }
}
