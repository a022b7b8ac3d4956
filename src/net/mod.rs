//! Network access: slide image retrieval from the content host.

pub mod image;
