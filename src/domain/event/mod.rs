pub mod dto;
pub mod entity;
pub mod filter;
pub mod handler;
pub mod service;
