pub mod error;
pub mod models;
pub mod routing;

pub use error::{CoreError, Result};
pub use models::tenant_config::TenantConfig;
pub use models::use_case::UseCase;
pub use models::use_case_selector::UseCaseSelector;
pub use models::use_case_set::UseCaseSet;
pub use routing::default_route::DefaultRoute;
pub use routing::nav_entry::NavEntry;
pub use routing::root_redirect::RootRedirect;
pub use routing::route_entry::RouteEntry;
pub use routing::route_resolution::RouteResolution;
pub use routing::route_table::{ROOT_PATH, RouteTable, is_root};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
