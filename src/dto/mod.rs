//! JSON payloads returned by the HTTP routes.

pub mod members;
