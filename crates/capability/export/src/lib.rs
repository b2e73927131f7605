//! Excel 导出能力
//!
//! - `export_rows`：技术条件 → 固定列顺序的表格行
//! - `export_file_name`：`tc_<资源>_<类型|all>_<dd-MM-yyyy>.xlsx`
//! - `SheetWriter` / `XlsxSheetWriter`：表格序列化
//! - `Exporter`：导出入口，维护“导出中”标志，无论成败都会复位

mod exporter;
mod rows;
mod writer;

pub use exporter::{EXPORT_FAILED_MESSAGE, ExportScope, Exporter, export_file_name};
pub use rows::{COLUMNS, ExportRow, PERMANENT_LABEL, export_rows};
pub use writer::{SheetWriter, XlsxSheetWriter};

/// 导出错误。
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export already in progress")]
    InProgress,
    #[error("spreadsheet error: {0}")]
    Sheet(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Sheet(err.to_string())
    }
}
