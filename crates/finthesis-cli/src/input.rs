//! Reading documents and summaries from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use finthesis_core::Document;

/// Read a whole file, or stdin when `path` is `-`.
pub(crate) fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse a JSON array of documents.
pub(crate) fn parse_documents(json: &str) -> anyhow::Result<Vec<Document>> {
    serde_json::from_str(json)
        .context("documents must be a JSON array of {\"text\": ..., \"metadata\": {...}} objects")
}

/// Load documents from `path`, optionally passing each text through
/// [`finthesis_summarizer::clean_article_text`].
pub(crate) fn load_documents(path: &Path, clean: bool) -> anyhow::Result<Vec<Document>> {
    let mut documents = parse_documents(&read_text(path)?)
        .with_context(|| format!("invalid documents file {}", path.display()))?;
    if clean {
        for document in &mut documents {
            document.text = finthesis_summarizer::clean_article_text(&document.text);
        }
    }

    let blank = documents.iter().filter(|d| d.is_blank()).count();
    if blank > 0 {
        tracing::warn!(blank, "some documents have no text and will be skipped");
    }
    tracing::info!(path = %path.display(), documents = documents.len(), clean, "loaded documents");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documents_with_and_without_metadata() {
        let docs = parse_documents(
            r#"[
                {"text": "Neobanks grow.", "metadata": {"source_url": "https://a.example"}},
                {"text": "No metadata here."}
            ]"#,
        )
        .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].source_id(), Some("https://a.example"));
        assert!(docs[1].metadata.is_empty());
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_documents("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_input() {
        let err = parse_documents(r#"{"text": "one"}"#).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_text(Path::new("/nonexistent/finthesis/docs.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/finthesis/docs.json"));
    }

    #[test]
    fn load_documents_cleans_on_request() {
        let path = std::env::temp_dir().join(format!("finthesis-docs-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"text": "By Jane Doe\nNeobanks are winning deposits.\nFollow us on X"}]"#,
        )
        .unwrap();

        let raw = load_documents(&path, false).unwrap();
        let cleaned = load_documents(&path, true).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(raw[0].text.contains("Jane Doe"));
        assert_eq!(cleaned[0].text, "Neobanks are winning deposits.");
    }
}
