//! Tests for consultation service
