//! Page-level route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose reusable components and install the page-lifetime DOM
//! listeners once they are mounted.

pub mod landing;
