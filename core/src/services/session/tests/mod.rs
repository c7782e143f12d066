//! Tests for session service

mod mocks;
