pub mod api;
pub mod connector_integration_v2;
pub mod connector_types;
pub mod events;
pub mod verification;
