pub mod api;
pub mod dao;
pub mod model;
pub mod render;
pub mod service;
