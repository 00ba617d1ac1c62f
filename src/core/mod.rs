//! Core domain models and business logic for lead capture and welcome emails

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod email;
pub mod leads;
#[cfg(all(test, feature = "ssr"))]
mod test_support;
