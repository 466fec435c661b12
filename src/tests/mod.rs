// Tests module
// Profile invariants: genesis reproduction, derive-by-override, checkpoint data
// Global selection: process-wide registry and the set-once active network

pub mod global_selection;
