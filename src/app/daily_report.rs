use crate::core::service::CatalogService;
use crate::domain::model::{ImportantTerms, SearchReport};
use crate::domain::ports::{CatalogStore, ConfigProvider, Storage};
use crate::utils::error::{CatalogError, Result};
use chrono::NaiveDate;

/// Label of the CSV row carrying the total product count.
pub const TOTAL_ROW: &str = "__total__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "report.output_formats".to_string(),
                value: other.to_string(),
                reason: "Supported values: json, csv".to_string(),
            }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn render(&self, report: &SearchReport) -> Result<Vec<u8>> {
        match self {
            Self::Json => Ok(serde_json::to_vec_pretty(report)?),
            Self::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                writer.write_record(["term", "hits"])?;
                for (term, hits) in &report.search_term_hits {
                    writer.write_record([term.clone(), hits.to_string()])?;
                }
                writer.write_record([TOTAL_ROW.to_string(), report.product_count.to_string()])?;
                writer.into_inner().map_err(|e| CatalogError::IoError(e.into_error()))
            }
        }
    }
}

pub fn report_file_name(date: NaiveDate, format: ReportFormat) -> String {
    format!("search-report-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

#[derive(Debug, Clone)]
pub struct DailyReportOutput {
    pub report: SearchReport,
    /// Paths written, relative to the storage root.
    pub files: Vec<String>,
}

/// One run of the daily report: build it, then persist one file per format.
pub struct DailyReportJob<S: CatalogStore, W: Storage> {
    service: CatalogService<S>,
    storage: W,
    formats: Vec<ReportFormat>,
}

impl<S: CatalogStore, W: Storage> DailyReportJob<S, W> {
    pub fn new(service: CatalogService<S>, storage: W, formats: Vec<ReportFormat>) -> Self {
        Self {
            service,
            storage,
            formats,
        }
    }

    pub fn from_config<C: ConfigProvider>(store: S, storage: W, config: &C) -> Result<Self> {
        let terms = ImportantTerms::new(config.important_terms().to_vec())?;
        let formats = config
            .report_formats()
            .iter()
            .map(|name| ReportFormat::parse(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(CatalogService::new(store, terms), storage, formats))
    }

    pub async fn run(&self) -> Result<DailyReportOutput> {
        self.run_for_date(chrono::Local::now().date_naive()).await
    }

    pub async fn run_for_date(&self, date: NaiveDate) -> Result<DailyReportOutput> {
        tracing::info!("Running search report for {}", date);
        let report = self.service.run_report().await?;

        let mut files = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            let name = report_file_name(date, *format);
            let data = format.render(&report)?;
            self.storage.write_file(&name, &data).await?;
            tracing::info!("Report written to {} ({} bytes)", name, data.len());
            files.push(name);
        }

        Ok(DailyReportOutput { report, files })
    }
}
