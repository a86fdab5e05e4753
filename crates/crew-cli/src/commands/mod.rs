pub mod mission;
pub mod personas;
pub mod serve;
