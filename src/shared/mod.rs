pub mod constants;
pub mod dates;
pub mod test_helpers;
pub mod types;
pub mod validation;
