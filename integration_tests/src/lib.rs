//! Cross-crate tests for the rising-tide analyzer live under `tests/`.
