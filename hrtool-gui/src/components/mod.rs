pub mod breeding;
pub mod finance;
pub mod horses;
pub mod nav;
