use crate::ExportError;
use crate::rows::{COLUMNS, ExportRow};
use rust_xlsxwriter::{Format, Workbook};

/// 表格序列化接口。
pub trait SheetWriter: Send + Sync {
    fn write(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ExportError>;
}

/// 单工作表 xlsx，首行为加粗标题，列宽预设。
#[derive(Debug, Clone)]
pub struct XlsxSheetWriter {
    sheet_name: String,
}

impl XlsxSheetWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

impl Default for XlsxSheetWriter {
    fn default() -> Self {
        Self::new("ТУ")
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write(&self, rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        {
            let sheet = workbook.add_worksheet();
            sheet.set_name(&self.sheet_name)?;
            for (col, (title, width)) in (0u16..).zip(COLUMNS) {
                sheet.write_string_with_format(0, col, title, &header)?;
                sheet.set_column_width(col, width)?;
            }
            for (row, entry) in (1u32..).zip(rows) {
                sheet.write_string(row, 0, &entry.organization)?;
                sheet.write_string(row, 1, &entry.tc_number)?;
                sheet.write_string(row, 2, &entry.object)?;
                sheet.write_string(row, 3, &entry.issue_date)?;
                sheet.write_string(row, 4, &entry.expiry_date)?;
                sheet.write_string(row, 5, entry.status)?;
                sheet.write_number(row, 6, entry.power_amount)?;
                sheet.write_string(row, 7, &entry.notes)?;
            }
        }
        Ok(workbook.save_to_buffer()?)
    }
}
