pub mod crop_rotate;
pub mod extract;
pub mod insert;
