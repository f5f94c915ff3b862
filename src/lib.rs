pub mod batch;
pub mod builder;
pub mod camera;
pub mod config;
pub mod error;
pub mod scene;
pub mod serialize;
pub mod util;
