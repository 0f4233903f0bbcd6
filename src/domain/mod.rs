pub mod category;
pub mod nested_set;
pub mod tree;
pub mod types;
