//! Property-based tests for URL interpretation.
