//! Unit tests for backend instances.
