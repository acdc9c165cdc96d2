#![allow(dead_code)]

pub mod scripted_backend;
pub mod stub_server;
