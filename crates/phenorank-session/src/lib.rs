//! phenorank-session - Session state for the result viewer: connection
//! settings, display locale, the current analysis result, and the image it
//! was computed from.

pub mod store;

pub use store::AppStore;
