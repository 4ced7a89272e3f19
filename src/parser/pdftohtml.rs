//! Driver for the external `pdftohtml` tool.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

use roxmltree::{Document as XmlDocument, ParsingOptions};

use crate::error::{Error, Result};

use super::options::ParseOptions;
use super::poppler::sanitize_xml;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// XML written by pdftohtml, removed on drop when it is a temporary file.
pub(crate) struct XmlOutput {
    path: PathBuf,
    temporary: bool,
}

impl XmlOutput {
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for XmlOutput {
    fn drop(&mut self) {
        if self.temporary {
            if let Err(e) = std::fs::remove_file(&self.path) {
                log::debug!("Could not remove {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Convert a PDF into pdftohtml XML.
pub(crate) fn run_pdftohtml(pdf: &Path, options: &ParseOptions) -> Result<XmlOutput> {
    let (path, temporary) = match &options.xml_path {
        Some(path) => (output_xml_path(path), false),
        None => (temp_xml_path(), true),
    };
    let output = XmlOutput { path, temporary };

    log::debug!(
        "Running {} on {} into {}",
        options.pdftohtml.display(),
        pdf.display(),
        output.path.display()
    );

    let result = Command::new(&options.pdftohtml)
        .args(["-nodrm", "-i", "-xml", "-zoom", "1.0"])
        .arg(pdf)
        .arg(&output.path)
        .output()?;

    if !result.status.success() {
        log::warn!(
            "pdftohtml failed on {}: {}",
            pdf.display(),
            String::from_utf8_lossy(&result.stderr).trim()
        );
        return Err(Error::ToolFailed {
            tool: options.pdftohtml.display().to_string(),
            status: result.status,
        });
    }

    Ok(output)
}

/// Whether a pdftohtml XML file holds at least one `<text>` element.
///
/// Unreadable or malformed files hold no text.
pub fn contains_text<P: AsRef<Path>>(xml_path: P) -> bool {
    let Ok(bytes) = std::fs::read(xml_path.as_ref()) else {
        return false;
    };
    let text = String::from_utf8_lossy(&bytes);
    let xml = sanitize_xml(&text);
    let parsing = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    match XmlDocument::parse_with_options(&xml, parsing) {
        Ok(doc) => doc
            .descendants()
            .any(|n| n.is_element() && n.tag_name().name() == "text"),
        Err(_) => false,
    }
}

/// pdftohtml appends `.xml` to an output name that lacks it.
fn output_xml_path(path: &Path) -> PathBuf {
    let has_xml_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
    if has_xml_extension {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".xml");
    PathBuf::from(name)
}

fn temp_xml_path() -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("pdf-features-{}-{}.xml", std::process::id(), n))
}
