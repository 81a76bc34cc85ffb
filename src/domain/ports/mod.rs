mod menu_source_port;

pub use menu_source_port::MenuSourcePort;
