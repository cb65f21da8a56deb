pub mod controller;
pub mod dropdown;
pub mod location;
pub mod markup;

pub use crate::controller::NavigationController;
pub use crate::location::Location;
pub use crate::markup::{Crumb, comparison_table, status_badge};
