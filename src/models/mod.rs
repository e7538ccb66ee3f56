pub mod admin;
pub mod comment;
pub mod month;
pub mod person;
pub mod subject;
pub mod team;
pub mod workload;
