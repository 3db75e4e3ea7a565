//! Reader preferences that outlive the process (currently the site language).

pub mod services;

pub use services::PreferenceStore;
