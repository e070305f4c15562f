mod direction;

pub use direction::LayoutDirection;
