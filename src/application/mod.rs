// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one goal: turn a filled-in form into a verdict.
//
// Rules for this layer:
//   - No tree-walking or scaling math here (Layer 5)
//   - No printing or prompting here (Layer 1)
//   - No direct file access here (Layer 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern

// The validate → transform → predict → present workflow
pub mod screen_use_case;
