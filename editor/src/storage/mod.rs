pub mod component_storage;
