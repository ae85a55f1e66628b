use std::path::PathBuf;

/// Everything a run needs to know about where to read and write.
///
/// `Default` holds the fixed locations the tool has always used: it reads
/// `ExampleData/*.out` and writes `convergencePlot.png` and `TableData.dat`
/// into the working directory.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory scanned (non-recursively) for monitor files.
    pub data_dir: PathBuf,
    /// File name suffix selecting monitor files, also stripped for labels.
    pub extension: String,
    /// Chart image; the format follows the extension.
    pub plot_path: PathBuf,
    /// Tab-delimited table of final values.
    pub summary_path: PathBuf,
    /// Leading rows dropped from every file before numeric parsing.
    pub lineskip: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("ExampleData/"),
            extension: ".out".to_string(),
            plot_path: PathBuf::from("convergencePlot.png"),
            summary_path: PathBuf::from("TableData.dat"),
            lineskip: 2,
        }
    }
}

impl RunConfig {
    /// Display label for a file: its name with every occurrence of the
    /// extension removed.
    pub fn label_for(&self, file_name: &str) -> String {
        if self.extension.is_empty() {
            file_name.to_string()
        } else {
            file_name.replace(&self.extension, "")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.extension, ".out");
        assert_eq!(cfg.lineskip, 2);
        assert_eq!(cfg.plot_path, PathBuf::from("convergencePlot.png"));
        assert_eq!(cfg.summary_path, PathBuf::from("TableData.dat"));
    }

    #[test]
    fn label_strips_extension() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.label_for("point-3.out"), "point-3");
        assert_eq!(cfg.label_for("a.out.out"), "a");
    }
}
