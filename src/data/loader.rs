use std::path::Path;

use anyhow::{Context, Result, bail};

/// Default upload limit (3 MiB), matching the size a browser upload would allow.
pub const DEFAULT_MAX_BYTES: u64 = 3 * 1024 * 1024;

/// Text pulled out of a file, ready for the pipeline.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name shown in the UI.
    pub name: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a document's text from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.pdf`  – text extracted page by page with `pdf-extract`
/// * `.txt` / `.text` / `.md` / `.csv` – read as UTF-8
pub fn load_document(path: &Path, max_bytes: u64) -> Result<Document> {
    let size = std::fs::metadata(path)
        .with_context(|| format!("reading metadata of {}", path.display()))?
        .len();
    if size > max_bytes {
        bail!(
            "File size exceeds the {} limit ({} bytes). Please choose a smaller file.",
            human_size(max_bytes),
            size
        );
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let text = match ext.as_str() {
        "pdf" => load_pdf(path)?,
        "txt" | "text" | "md" | "csv" => {
            std::fs::read_to_string(path).context("reading text file")?
        }
        other => bail!("Unsupported file extension: .{other}"),
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    log::info!("Loaded {name}: {} characters", text.len());
    Ok(Document { name, text })
}

// ---------------------------------------------------------------------------
// PDF loader
// ---------------------------------------------------------------------------

fn load_pdf(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).context("reading PDF file")?;
    extract_pdf_text(&bytes)
}

/// Extract text from a PDF held in memory.
///
/// Fails when the PDF has no extractable text (e.g. a scanned image).
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    if !bytes.starts_with(b"%PDF-") {
        bail!("not a PDF file (missing %PDF- header)");
    }
    let text = pdf_extract::extract_text_from_mem(bytes)
        .context("failed to extract text from PDF bytes")?;
    if text.trim().is_empty() {
        bail!("Could not extract any readable text from the PDF. Please check the file.");
    }
    Ok(text)
}

fn human_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{bytes} byte")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Revenue: 12").unwrap();

        let doc = load_document(file.path(), DEFAULT_MAX_BYTES).unwrap();
        assert_eq!(doc.text.trim(), "Revenue: 12");
        assert!(doc.name.ends_with(".txt"));
    }

    #[test]
    fn test_rejects_oversized_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[b'a'; 64]).unwrap();

        let err = load_document(file.path(), 16).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let err = load_document(file.path(), DEFAULT_MAX_BYTES).unwrap_err();
        assert!(err.to_string().contains(".docx"));
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = extract_pdf_text(b"hello").unwrap_err();
        assert!(err.to_string().contains("%PDF-"));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(DEFAULT_MAX_BYTES), "3MB");
        assert_eq!(human_size(100), "100 byte");
    }
}
