pub mod account_setup;
pub mod data_integration;

pub use account_setup::AccountSetupStep;
pub use data_integration::DataIntegrationStep;
