pub mod options;
pub mod pages;
