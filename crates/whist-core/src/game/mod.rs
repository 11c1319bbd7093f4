pub mod serialization;
