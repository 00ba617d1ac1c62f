pub mod common;
pub mod icon;
pub mod lead_form;
pub mod pages;

pub use icon::{Icon, icons};
pub use lead_form::LeadForm;
