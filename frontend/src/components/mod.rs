pub mod confetti;
pub mod particle_background;

pub use confetti::Confetti;
pub use particle_background::ParticleBackground;
