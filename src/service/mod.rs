//! Data-access layer: one store per resource, all stateless over a shared pool.

pub mod cms;
pub mod contacts;
pub mod faqs;
pub mod house_types;
pub mod social;

pub use cms::CmsStore;
pub use contacts::ContactStore;
pub use faqs::FaqStore;
pub use house_types::HouseTypeStore;
pub use social::SocialMediaStore;
