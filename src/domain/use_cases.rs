pub mod contact;
pub mod skills;
