pub mod client;
pub mod grid;
pub mod model;
pub mod normalize;
pub mod responses;
pub mod summary;

#[cfg(test)]
pub mod fake;
