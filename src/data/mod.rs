/// Data layer: file discovery, parsing, and the summary table.
///
/// Architecture:
/// ```text
///   data dir (*.out)
///        │
///        ▼
///   ┌──────────┐
///   │   scan    │  list matching files → natural order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first file → Header; every file → Series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  summary  │  last value of each Series → TableData.dat
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod scan;
pub mod summary;
