pub mod alerts;
pub mod daypart;
pub mod weather;
