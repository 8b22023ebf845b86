pub mod property_grid;
