pub mod chain;
pub mod dto;
pub mod entity;
pub mod ports;
