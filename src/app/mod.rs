pub mod daily_report;

pub use daily_report::{report_file_name, DailyReportJob, DailyReportOutput, ReportFormat};
