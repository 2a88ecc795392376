//! Unit tests for environment repository selection.
