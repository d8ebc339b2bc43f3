//! EduVerse site collaborators.
//!
//! Everything here consumes the motion core's registration API or is a pure
//! data transform: the course catalog with search/filter/sort, the contact
//! form with its simulated submission, static site content, and the page
//! mounting layer that binds each page's stored motion document to a live
//! engine.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod pages;

pub use catalog::{search, CatalogQuery, Course, SortKey};
pub use contact::{ContactForm, FieldError, Receipt, Submission};
pub use pages::{mount_chrome, mount_course_grid, mount_page, MountedPage, PageKind};
