//! This module has things for managing the domain,
//! which really means retrieving values based on world coordinates.
//! A plate is stored as a row major buffer tagged with the `AABB`
//! it covers, and every solver stage works through `DomainView`.

mod view;

pub use view::*;
