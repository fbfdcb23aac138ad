//! HTTP handlers for plant CRUD and the landing page.

pub mod landing;
pub mod plants;
pub use landing::*;
pub use plants::*;
