pub mod color;
pub mod html;
