pub mod default_route;
pub mod nav_entry;
pub mod root_redirect;
pub mod route_entry;
pub mod route_resolution;
pub mod route_table;
