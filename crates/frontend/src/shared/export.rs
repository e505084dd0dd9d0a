//! CSV/TSV export of the rows currently shown by a list, and the browser
//! download used to hand the file to the user.

use chrono::NaiveDate;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Column of an export (and of the on-screen table): header label + accessor
pub struct ColumnSpec<T> {
    pub header: &'static str,
    pub accessor: fn(&T) -> String,
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnSpec<T> {}

impl<T> ColumnSpec<T> {
    pub const fn new(header: &'static str, accessor: fn(&T) -> String) -> Self {
        Self { header, accessor }
    }

    pub fn value(&self, item: &T) -> String {
        (self.accessor)(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Tsv => "text/tab-separated-values;charset=utf-8",
        }
    }

    fn render_cell(&self, cell: &str) -> String {
        match self {
            ExportFormat::Csv => format!("\"{}\"", cell.replace('"', "\"\"")),
            // no quoting in TSV: separators inside a value would split the row
            ExportFormat::Tsv => cell.replace(['\t', '\n', '\r'], " "),
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            ExportFormat::Csv => ",",
            ExportFormat::Tsv => "\t",
        }
    }
}

/// File ready for the download sink
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Download failed: {0}")]
    Download(String),
}

/// Header row followed by one row per item, joined by `\n`.
/// An empty `items` produces the header row alone.
pub fn render<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    columns: &[ColumnSpec<T>],
    format: ExportFormat,
) -> String {
    let row = |cells: Vec<String>| -> String {
        cells
            .iter()
            .map(|cell| format.render_cell(cell))
            .collect::<Vec<_>>()
            .join(format.separator())
    };

    let mut lines = vec![row(columns.iter().map(|c| c.header.to_string()).collect())];
    for item in items {
        lines.push(row(columns.iter().map(|c| c.value(item)).collect()));
    }
    lines.join("\n")
}

/// `<entity>-<YYYY-MM-DD>.<ext>`
pub fn export_file_name(entity: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!("{}-{}.{}", entity, date.format("%Y-%m-%d"), format.extension())
}

pub fn build_export<'a, T: 'a>(
    entity: &str,
    items: impl IntoIterator<Item = &'a T>,
    columns: &[ColumnSpec<T>],
    format: ExportFormat,
    date: NaiveDate,
) -> ExportFile {
    ExportFile {
        bytes: render(items, columns, format).into_bytes(),
        file_name: export_file_name(entity, date, format),
        mime_type: format.mime_type(),
    }
}

/// Receives finished export files
pub trait DownloadSink {
    fn save(&self, file: &ExportFile) -> Result<(), ExportError>;
}

/// Saves through a temporary `<a download>` pointing at a Blob URL
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn save(&self, file: &ExportFile) -> Result<(), ExportError> {
        let blob = create_blob(&file.bytes, file.mime_type)?;
        download_blob(&blob, &file.file_name)
    }
}

fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Download(format!("Failed to create blob: {:?}", e)))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let fail = |what: &str| ExportError::Download(what.to_string());
    let window = web_sys::window().ok_or_else(|| fail("No window object"))?;
    let document = window.document().ok_or_else(|| fail("No document object"))?;
    let body = document.body().ok_or_else(|| fail("No body element"))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| ExportError::Download(format!("Failed to create object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Download(format!("Failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Download(format!("Failed to cast to anchor: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor)
        .map_err(|e| ExportError::Download(format!("Failed to append anchor: {:?}", e)))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Download(format!("Failed to revoke URL: {:?}", e)))?;

    log::info!("exported {}", filename);
    Ok(())
}
