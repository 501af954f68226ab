pub mod attacks;
pub mod destinations;
pub mod generation;
pub mod move_list;
