// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure data types that define the core concepts of the system.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Keeping this layer pure means the vocabulary and record types
// are testable without a tensor backend.

// One row of the source table: context, target, split label
pub mod record;

// Token <-> index bidirectional mapping with reserved indices
pub mod vocabulary;

// Core abstractions (traits) that other layers implement
pub mod traits;
