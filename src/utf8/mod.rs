pub mod boolean;
pub mod character;
pub mod int;
pub mod literal;
pub mod substring;

pub use boolean::boolean;
pub use character::char;
pub use int::int;
pub use literal::removing_literal;
pub use substring::substring;
