pub mod insights;
pub mod labels;
pub mod price;
pub mod ranking;
pub mod restaurant;
pub mod sales;

pub use insights::*;
pub use labels::*;
pub use price::*;
pub use ranking::*;
pub use restaurant::*;
pub use sales::*;
