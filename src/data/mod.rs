/// Data layer: text in, classified observations out.
///
/// Architecture:
/// ```text
///  .pdf / .txt / typed text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  file → Document { text }
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ tokenizer  │  "key: value" lines → ObservationSet
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  numeral match → numeric / descriptive
///   └──────────┘
/// ```

pub mod classify;
pub mod export;
pub mod loader;
pub mod model;
pub mod tokenizer;
