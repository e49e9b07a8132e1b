pub mod backend;
pub mod config;
pub mod form;
pub mod messages;
pub mod pages;
pub mod routes;
pub mod url;
