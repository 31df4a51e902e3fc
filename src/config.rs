/// Greeting printed first by the demo.
pub const DEMO_MESSAGE: &str = "Hello, MCP Server!";

/// Initial contents of the demo vector.
pub const DEMO_NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

/// Value pushed onto the demo vector.
pub const DEMO_PUSHED_NUMBER: i32 = 6;

/// Operands for `add_numbers`.
pub const ADDITION_OPERANDS: (i32, i32) = (10, 20);

/// Operands for `multiply_numbers`.
pub const MULTIPLICATION_OPERANDS: (i32, i32) = (6, 7);

/// Operands for `Calculator::add`.
pub const CALCULATOR_ADD_OPERANDS: (f64, f64) = (2.5, 1.5);

/// Operands for `Calculator::subtract`.
pub const CALCULATOR_SUBTRACT_OPERANDS: (f64, f64) = (10.0, 4.5);

/// String used to exercise completion on `str` methods.
pub const COMPLETION_MESSAGE: &str = "Testing completion";

/// Number of characters kept from `COMPLETION_MESSAGE`.
pub const COMPLETION_PREFIX_LEN: usize = 7;
