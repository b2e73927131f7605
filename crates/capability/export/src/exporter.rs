use crate::ExportError;
use crate::rows::export_rows;
use crate::writer::{SheetWriter, XlsxSheetWriter};
use chrono::NaiveDate;
use domain::{ResourceType, TcType, TechnicalCondition};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tc_telemetry::{record_export_failure, record_export_success};

/// 导出失败时的统一提示。
pub const EXPORT_FAILED_MESSAGE: &str = "Ошибка при экспорте в Excel";

/// 导出范围：当前类型（可带过滤）或该资源的全部记录。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    Kind(TcType),
    All,
}

impl ExportScope {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Kind(kind) => kind.as_str(),
            Self::All => "all",
        }
    }
}

/// 例如 `tc_electricity_permanent_16-10-2026.xlsx`。
pub fn export_file_name(resource: ResourceType, scope: ExportScope, today: NaiveDate) -> String {
    format!(
        "tc_{}_{}_{}.xlsx",
        resource.as_str(),
        scope.as_str(),
        today.format("%d.%m.%Y").to_string().replace('.', "-")
    )
}

/// 导出入口。
///
/// 同一时刻只允许一次导出；“导出中”标志由守卫在离开作用域时复位。
pub struct Exporter<W = XlsxSheetWriter> {
    writer: W,
    exporting: AtomicBool,
}

impl Default for Exporter<XlsxSheetWriter> {
    fn default() -> Self {
        Self::new(XlsxSheetWriter::default())
    }
}

impl<W: SheetWriter> Exporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            exporting: AtomicBool::new(false),
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::SeqCst)
    }

    /// 生成表格字节。
    pub fn export<'a, I>(&self, permits: I) -> Result<Vec<u8>, ExportError>
    where
        I: IntoIterator<Item = &'a TechnicalCondition>,
    {
        let _guard = ExportingGuard::acquire(&self.exporting)?;
        let result = self.render(permits);
        record_outcome(result.as_ref().map(|(rows, bytes)| (*rows, bytes.len())));
        result.map(|(_, bytes)| bytes)
    }

    /// 生成表格并写入 `dir`，返回文件路径。
    ///
    /// “导出中”标志覆盖到文件写完为止，每次导出只记录一次结果。
    pub fn export_to_dir<'a, I>(
        &self,
        dir: &Path,
        file_name: &str,
        permits: I,
    ) -> Result<PathBuf, ExportError>
    where
        I: IntoIterator<Item = &'a TechnicalCondition>,
    {
        let _guard = ExportingGuard::acquire(&self.exporting)?;
        let result = self.render(permits).and_then(|(rows, bytes)| {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(file_name);
            std::fs::write(&path, &bytes)?;
            Ok((rows, bytes.len(), path))
        });
        record_outcome(result.as_ref().map(|(rows, size, _)| (*rows, *size)));
        result.map(|(_, _, path)| path)
    }

    fn render<'a, I>(&self, permits: I) -> Result<(usize, Vec<u8>), ExportError>
    where
        I: IntoIterator<Item = &'a TechnicalCondition>,
    {
        let rows = export_rows(permits);
        let bytes = self.writer.write(&rows)?;
        Ok((rows.len(), bytes))
    }
}

fn record_outcome(result: Result<(usize, usize), &ExportError>) {
    match result {
        Ok((rows, bytes)) => {
            record_export_success();
            tracing::info!(rows, bytes, "export finished");
        }
        Err(err) => {
            record_export_failure();
            tracing::warn!(error = %err, "export failed");
        }
    }
}

struct ExportingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExportingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ExportError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ExportError::InProgress)?;
        Ok(Self { flag })
    }
}

impl Drop for ExportingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
