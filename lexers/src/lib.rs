mod scanner;
mod helpers;
mod arith_tokenizer;

pub use scanner::Scanner;
pub use arith_tokenizer::{ArithTokenizer, ArithToken};

pub use helpers::parse_number;
pub use helpers::scan_arith_op;
pub use helpers::scan_number;
