//! Session service module
//!
//! Login, refresh-token rotation, logout and request authentication built on
//! top of the token service. Credential checks happen before `start_session`
//! and are not part of this crate.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
