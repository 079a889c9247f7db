//! Unit tests for the suggestion gateway.
