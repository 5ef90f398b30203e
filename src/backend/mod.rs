pub mod command;
pub mod ifconfig;
