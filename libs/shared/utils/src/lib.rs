pub mod guard;
pub mod test_utils;
