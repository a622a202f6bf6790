pub mod dto;
pub mod entity;
pub mod handler;
pub mod parent;
pub mod service;
