// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod write_to_buf;

// Public re-exports (flat API) for convenience.
pub use write_to_buf::*;
