/// Data layer: core types and the four column-transformation stages.
///
/// Architecture:
/// ```text
///  bank-additional-full.csv  (sep=';', quote='"')
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table, y → class, yes/no → 1/0
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  min-max scale numeric columns in place
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  encode    │  one-hot categoricals, rename to "field=value"
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  schema    │  strict reindex onto the 63 target columns → CSV
///   └───────────┘
/// ```

pub mod encode;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod schema;
