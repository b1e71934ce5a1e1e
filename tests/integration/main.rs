#[path = "../common/mod.rs"]
mod common;

mod faucet_service;
