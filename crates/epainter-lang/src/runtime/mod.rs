pub mod drawing;
pub mod interpreter;
pub mod value;

pub use interpreter::Interpreter;
pub use value::Value;
