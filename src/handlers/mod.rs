//! HTTP handlers: parse the request, call the store, wrap the result in the envelope.

pub mod cms;
pub mod contacts;
pub mod faqs;
pub mod house_types;
pub mod social;
pub mod status;
