pub mod description;
pub mod experience;
pub mod gap;
pub mod report;
pub mod scoring;
pub mod skills;
