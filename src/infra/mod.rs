// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// The only layer that touches the filesystem:
//
//   artifact_store.rs — Loads the two frozen artifacts exactly
//                       once at startup and sanity-checks them
//                       before anything is served. There is no
//                       reload and no hot-swap: if an artifact
//                       file changes on disk, the process keeps
//                       the copy it loaded.
//
// Reference: Rust Book §9 (Error Handling), §12 (Reading Files)

/// Load-once deserialization of the model and scaler files
pub mod artifact_store;
