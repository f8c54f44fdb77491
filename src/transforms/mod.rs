pub mod flip;
pub mod frame;
pub mod scale;
pub mod stack;
pub mod tensor;
