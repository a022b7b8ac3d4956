pub mod config;
pub mod nav;
pub mod net;
pub mod scroll;
pub mod slides;
