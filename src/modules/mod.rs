pub mod activity;
pub mod auth;
pub mod cv;
pub mod partner;
pub mod project;
pub mod team;
pub mod user;
pub mod worklog;
