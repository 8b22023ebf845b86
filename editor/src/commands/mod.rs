pub mod command_manager;
pub mod property_commands;
