pub mod compare;
pub mod util;
