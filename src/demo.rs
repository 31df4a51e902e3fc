use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    calculator::Calculator,
    config::{
        ADDITION_OPERANDS, CALCULATOR_ADD_OPERANDS, CALCULATOR_SUBTRACT_OPERANDS,
        COMPLETION_MESSAGE, COMPLETION_PREFIX_LEN, DEMO_MESSAGE, DEMO_NUMBERS, DEMO_PUSHED_NUMBER,
        MULTIPLICATION_OPERANDS,
    },
    utils::{add_numbers, multiply_numbers},
};

/// Everything the demo computed, in the order it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    pub message: String,
    pub addition_result: i32,
    pub product_result: i32,
    pub calculator_sum: f64,
    pub calculator_difference: f64,
    pub last_result: f64,
    pub numbers: Vec<i32>,
    pub numbers_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_length: Option<usize>,
    pub completion_prefix: String,
}

/// Runs the demo with the default message.
pub fn run() -> DemoReport {
    run_with_message(DEMO_MESSAGE)
}

/// Runs the demo, exercising the utilities, the calculator, and a few
/// `Vec`/`String` methods.
pub fn run_with_message(message: &str) -> DemoReport {
    let message = message.to_string();
    let mut numbers = DEMO_NUMBERS.to_vec();

    let (a, b) = ADDITION_OPERANDS;
    let addition_result = add_numbers(a, b);
    debug!("add_numbers({}, {}) = {}", a, b, addition_result);

    let (a, b) = MULTIPLICATION_OPERANDS;
    let product_result = multiply_numbers(a, b);
    debug!("multiply_numbers({}, {}) = {}", a, b, product_result);

    let mut calc = Calculator::new();
    let (a, b) = CALCULATOR_ADD_OPERANDS;
    let calculator_sum = calc.add(a, b);
    let (a, b) = CALCULATOR_SUBTRACT_OPERANDS;
    let calculator_difference = calc.subtract(a, b);
    debug!(
        "calculator sum = {}, difference = {}",
        calculator_sum, calculator_difference
    );

    numbers.push(DEMO_PUSHED_NUMBER);
    let numbers_len = numbers.len();

    // References to `message` are intentional.
    let message_length = if message.is_empty() {
        None
    } else {
        Some(message.len())
    };

    let completion_prefix: String = COMPLETION_MESSAGE
        .chars()
        .take(COMPLETION_PREFIX_LEN)
        .collect();

    DemoReport {
        message,
        addition_result,
        product_result,
        calculator_sum,
        calculator_difference,
        last_result: calc.last_result(),
        numbers,
        numbers_len,
        message_length,
        completion_prefix,
    }
}

impl fmt::Display for DemoReport {
    /// One result per line, in the order the demo computed them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f, "Addition result: {}", self.addition_result)?;
        writeln!(f, "Product result: {}", self.product_result)?;
        writeln!(f, "Calculator result: {}", self.calculator_sum)?;
        writeln!(f, "Calculator difference: {}", self.calculator_difference)?;
        writeln!(f, "Last result: {}", self.last_result)?;
        writeln!(f, "Numbers: {} items", self.numbers_len)?;
        if let Some(len) = self.message_length {
            writeln!(f, "Message length: {}", len)?;
        }
        writeln!(f, "Completion prefix: {}", self.completion_prefix)
    }
}

impl DemoReport {
    /// Renders the report as console text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
