//! Suppliers command handler.
//!
//! Implements the `suppliers` subcommand: per-supplier performance with
//! optional drill-down filters.

use super::{prepare, ReportOptions};
use crate::analysis::{filter_supplier_report, supplier_report, SupplierReportFilter};
use crate::pipeline::{exit_codes, write_output};
use anyhow::Result;

/// Suppliers command configuration
pub struct SuppliersConfig {
    pub options: ReportOptions,
    /// Drill-down filter; inactive when no criterion is set
    pub filter: SupplierReportFilter,
}

/// Run the suppliers command, returning the desired exit code.
pub fn run_suppliers(config: SuppliersConfig) -> Result<i32> {
    let prepared = prepare(&config.options)?;

    let stats = supplier_report(&prepared.groups);
    let stats = if config.filter.is_active() {
        filter_supplier_report(&stats, &config.filter)
    } else {
        stats
    };

    let output = prepared.renderer.render_suppliers(&stats, &prepared.meta)?;
    write_output(&output, &prepared.target, config.options.quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DatasetSource;
    use crate::reports::ReportFormat;
    use std::io::Write;

    fn dataset() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile");
        write!(
            file,
            r#"{{
              "items": [{{"id": "EQ001", "code": "EQ001", "name": "Pump", "specs": ""}}],
              "quotations": [
                {{"id": "q1", "itemCode": "EQ001", "supplierName": "Acme", "brand": "B", "price": 100.0, "vatIncluded": false, "technicalScore": 8.0, "notes": ""}},
                {{"id": "q2", "itemCode": "EQ001", "supplierName": "Bolt", "brand": "B", "price": 120.0, "vatIncluded": false, "technicalScore": 9.0, "notes": ""}}
              ]
            }}"#
        )
        .expect("write");
        file
    }

    fn options(data: &std::path::Path, out: &std::path::Path) -> ReportOptions {
        ReportOptions {
            source: DatasetSource::Combined(data.to_path_buf()),
            weight_percent: 70,
            format: ReportFormat::Json,
            output_file: Some(out.to_path_buf()),
            no_color: true,
            quiet: true,
        }
    }

    #[test]
    fn test_run_suppliers_unfiltered() {
        let data = dataset();
        let out = tempfile::NamedTempFile::new().expect("tempfile");

        let code = run_suppliers(SuppliersConfig {
            options: options(data.path(), out.path()),
            filter: SupplierReportFilter::default(),
        })
        .expect("run");
        assert_eq!(code, exit_codes::SUCCESS);

        let written = std::fs::read_to_string(out.path()).expect("read");
        assert!(written.contains("Acme"));
        assert!(written.contains("Bolt"));
    }

    #[test]
    fn test_run_suppliers_filtered() {
        let data = dataset();
        let out = tempfile::NamedTempFile::new().expect("tempfile");

        let code = run_suppliers(SuppliersConfig {
            options: options(data.path(), out.path()),
            filter: SupplierReportFilter {
                supplier: Some("Acme".into()),
                ..Default::default()
            },
        })
        .expect("run");
        assert_eq!(code, exit_codes::SUCCESS);

        let written = std::fs::read_to_string(out.path()).expect("read");
        assert!(written.contains("Acme"));
        assert!(!written.contains("Bolt"));
    }
}
