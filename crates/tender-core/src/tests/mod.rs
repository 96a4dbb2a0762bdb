mod error;
mod models;
mod ports;
