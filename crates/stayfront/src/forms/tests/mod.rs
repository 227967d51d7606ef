mod common;
mod profile;
mod review;
