//! Unit tests for rubric-agent-cli, organized by module.
//!
//! Each submodule documents the behaviour under test.
