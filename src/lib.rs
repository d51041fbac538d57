// Crate entry point. Declare and expose modules so tests can reach the code under test.
//
// Responsibilities
// - Only declare and expose modules. No logic here.

pub mod core {
    pub mod cup;
    pub mod cup_size;
    pub mod registry;
}

// Isolation harness. Unit tests get it through `cfg(test)`, integration tests through the
// `test-support` feature.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    pub mod isolation;
}
