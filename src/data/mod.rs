/// Data layer: core types, loading, series building and statistics.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → Vec<ImmdRecord>, Vec<WarsCase>
///   └──────────┘
///        │                         │
///        ▼                         ▼
///   ┌──────────┐   Selection  ┌──────────┐
///   │  series   │◀──────────── │  filter   │
///   └──────────┘              └──────────┘
///        │                         │
///        ▼                         ▼
///   ┌──────────┐              ┌──────────┐
///   │  chart    │ stacked     │  cases    │ gender / age / citizenship
///   └──────────┘ layers       └──────────┘
/// ```

pub mod cases;
pub mod chart;
pub mod filter;
pub mod loader;
pub mod model;
pub mod series;
