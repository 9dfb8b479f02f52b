//! Инфраструктурный слой вокруг движка кено:
//! - RNG-реализации для движка;
//! - вывод seed'ов для пакетной симуляции.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
