pub mod filter;
pub mod params;
