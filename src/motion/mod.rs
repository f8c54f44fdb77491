pub mod stroke;
pub mod velocity;
