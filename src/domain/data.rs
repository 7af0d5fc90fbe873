pub mod projects;
pub mod skills;
