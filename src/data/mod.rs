/// Data layer: core table type, loading, splitting and writing.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  column names, Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  split   │  seeded permutation → (train, test)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  Dataset → .csv
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod split;
pub mod writer;
