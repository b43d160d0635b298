//! Entity <-> model mappers

mod application;
mod job;
mod profile;
mod user;
