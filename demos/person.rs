//! Parse a `name: <letters>, age: <digits>` record and print it.
//!
//! ```text
//! RUST_LOG=trace cargo run --example person -- "name: John, age: 90"
//! ```

use clap::Parser as _;
use parsilite::prelude::*;

#[derive(clap::Parser, Debug)]
#[command(about = "Parse a person record such as \"name: John, age: 90\"")]
struct Args {
    /// Record to parse
    #[arg(default_value = "name: John, age: 90")]
    input: String,

    /// Fail if anything is left after the record
    #[arg(long)]
    strict: bool,
}

struct Person {
    name: String,
    age: i64,
}

fn person<'code>() -> impl Parser<'code, Output = Person> {
    let name = zip(
        removing_literal("name: "),
        substring(char::is_alphabetic).filter(|name| !name.is_empty(), "expected a name"),
    )
    .map(|((), name)| name.to_string());
    let age = zip(removing_literal("age: "), int()).map(|((), age)| age);

    zip3(name, removing_literal(", "), age).map(|(name, (), age)| Person { name, age })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let (person, rest) = match person().run(&args.input) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::debug!("full error: {:?}", err);
            return Err(err.likely_error().to_string().into());
        }
    };

    if args.strict && !rest.is_empty() {
        return Err(format!("unexpected trailing input {:?}", rest).into());
    }

    println!("name: {}", person.name);
    println!("age: {}", person.age);
    if !rest.is_empty() {
        println!("rest: {:?}", rest);
    }
    Ok(())
}
