//! Static content surfaces: the project catalog and the page's animation
//! manifest. Read-only inputs, loaded from JSON at startup.

pub mod manifest;
pub mod projects;
