pub mod color_vision_screening;
