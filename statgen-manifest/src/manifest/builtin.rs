//! The task table used when no manifest file is given.

use super::{Manifest, OutputConfig, TaskConfig};

const ROCKSDB_STATISTICS: &str = "../rocksdb/include/rocksdb/statistics.h";
const TITAN_STATISTICS: &str = "../libtitan_sys/titan/include/titan/statistics.h";

impl Manifest {
    /// Tickers and histogram types of RocksDB followed by those of Titan.
    ///
    /// Paths are relative to the `librocksdb_sys` crate directory.
    pub fn builtin() -> Self {
        Self {
            output: OutputConfig::default(),
            tasks: vec![
                TaskConfig::new("DBStatisticsTickerType")
                    .source(ROCKSDB_STATISTICS, "Tickers")
                    .source(TITAN_STATISTICS, "TickerType"),
                TaskConfig::new("DBStatisticsHistogramType")
                    .source(ROCKSDB_STATISTICS, "Histograms")
                    .source(TITAN_STATISTICS, "HistogramType"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let manifest = Manifest::builtin();
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_builtin_order() {
        let manifest = Manifest::builtin();
        let names: Vec<_> = manifest.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["DBStatisticsTickerType", "DBStatisticsHistogramType"]);

        let tickers = &manifest.tasks[0];
        assert_eq!(tickers.sources[0].enum_name, "Tickers");
        assert_eq!(tickers.sources[1].enum_name, "TickerType");
        assert_eq!(tickers.sentinel_suffix, "ENUM_MAX");
    }
}
