pub mod tenant_config;
pub mod use_case;
pub mod use_case_selector;
pub mod use_case_set;
