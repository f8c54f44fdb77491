pub mod canvas;
pub mod stroke;
