/// Adds two integers together.
///
/// Overflow wraps around instead of panicking, in debug builds too.
pub fn add_numbers(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Multiplies two integers, wrapping on overflow.
pub fn multiply_numbers(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}
