pub mod data;
pub mod entities;
pub mod use_cases;
