pub mod directive_source;
pub mod executor;
pub mod host;
pub mod hot_edge;

pub use directive_source::DirectiveSource;
pub use host::create_host_driver;
