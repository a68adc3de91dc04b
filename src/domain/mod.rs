// Domain layer: the vowel set, scan result and the reporting port. std only.

pub mod model;
pub mod ports;
