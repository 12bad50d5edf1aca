pub mod intervals;
