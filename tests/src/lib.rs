// Integration test targets live next to this crate's manifest; see the
// [[test]] entries in Cargo.toml.
