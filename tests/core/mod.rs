// tests/core/mod.rs

#[cfg(test)]
mod digest;
#[cfg(test)]
mod keys;
#[cfg(test)]
mod password;
