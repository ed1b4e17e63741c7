#[cfg(test)]
pub mod arbitrary;
pub mod filename;
pub mod fraction;
