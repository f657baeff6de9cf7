//! # parsilite - Parser Combinator Library
//!
//! A small parser combinator library for ad-hoc structured text such as
//! `"name: John, age: 90"`.
//!
//! A parser takes a [`Cursor`] into the input by `&mut`. On success it
//! advances the cursor past what it matched and returns a value; on failure it
//! returns a [`ParseError`] and leaves the cursor alone. Primitives in
//! [`utf8`] are combined into larger parsers:
//!
//! - **Sequencing**: [`zip`](zip::zip), [`zip3`](zip::zip3), roll back when a
//!   later stage fails
//! - **Transformation**: [`map`](map::MapExt::map), [`try_map`](map::MapExt::try_map)
//! - **Ordered choice**: [`or`](or::OrExt::or), [`choice`](or::choice)
//! - **Dependent chaining**: [`flat_map`](flat_map::FlatMapExt::flat_map)
//!
//! ```
//! use parsilite::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! let name = zip(removing_literal("name: "), substring(char::is_alphabetic))
//!     .map(|((), name)| name.to_string());
//! let age = zip(removing_literal("age: "), int()).map(|((), age)| age);
//! let person = zip3(name, removing_literal(", "), age)
//!     .map(|(name, (), age)| Person { name, age });
//!
//! let (person, rest) = person.run("name: John, age: 90").unwrap();
//! assert_eq!(person, Person { name: "John".into(), age: 90 });
//! assert_eq!(rest, "");
//! ```

pub mod always;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod flat_map;
pub mod lazy;
pub mod map;
pub mod or;
pub mod parser;
pub mod utf8;
pub mod zip;

pub use always::{always, never};
pub use cursor::Cursor;
pub use error::{ErrorKind, ParseError, ParseResult};
pub use or::choice;
pub use parser::{BoxedParser, Parser, SyncBoxedParser, from_fn};
pub use zip::{zip, zip3};

/// Everything needed to build grammars, in one import
pub mod prelude {
    pub use crate::always::{always, never};
    pub use crate::cursor::Cursor;
    pub use crate::error::{ErrorKind, ParseError, ParseResult};
    pub use crate::filter::FilterExt;
    pub use crate::flat_map::FlatMapExt;
    pub use crate::lazy::lazy;
    pub use crate::map::MapExt;
    pub use crate::or::{OrExt, choice};
    pub use crate::parser::{BoxedExt, BoxedParser, Parser, SyncBoxedParser, from_fn};
    pub use crate::utf8::{boolean, char, int, removing_literal, substring};
    pub use crate::zip::{ZipExt, zip, zip3};
}
