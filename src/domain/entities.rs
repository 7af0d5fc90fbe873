pub mod contact;
pub mod filter;
pub mod project;
pub mod skill;
