mod category;

pub use category::{Category, CategoryFilter, CategoryUpdate, DeletionCheck, NewCategory};
