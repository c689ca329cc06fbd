// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO serde_json or file I/O here
//   - NO clap or terminal code
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no artifact files needed)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The eight screening fields and their per-field bounds
pub mod field_spec;

// The fixed-order 8-element input to the classifier
pub mod feature;

// The binary verdict and its user-facing message
pub mod decision;

// Per-session form values and the Editing/Submitted phase
pub mod session;

// Core abstractions (traits) that the ML layer implements
pub mod traits;

// The error taxonomy shared by every layer
pub mod error;
