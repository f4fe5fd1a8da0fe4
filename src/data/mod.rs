/// Data layer: core types, loading, filtering and metric coercion.
///
/// Architecture:
/// ```text
///        .csv
///          │
///          ▼
///   ┌──────────┐
///   │  loader   │  parse file, round Year → Table
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │   Table   │  Vec<Record>, country / year options
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  filter   │  apply Selection → working subset indices
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  metric   │  raw cell → Option<f64>
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metric;
pub mod model;
