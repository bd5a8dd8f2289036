/// Data layer: table types, loading, and range resolution.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FrdmTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ FrdmTable  │  validated, ordered Vec<TableRow>
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resolver  │  input mm → bracketing row + proximity warnings
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod resolver;
