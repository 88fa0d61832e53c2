//! Test utilities for scripting key transitions frame by frame.
