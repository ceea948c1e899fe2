pub mod driver;

pub use driver::VerificationDriver;
