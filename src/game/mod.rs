// Game layer: the mascot built on top of the engine

pub mod characters;
