use parsilite::prelude::*;

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    age: i64,
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn name<'code>() -> impl Parser<'code, Output = String> {
    zip(removing_literal("name: "), substring(char::is_alphabetic))
        .map(|((), name)| name.to_string())
}

fn age<'code>() -> impl Parser<'code, Output = i64> {
    zip(removing_literal("age: "), int()).map(|((), age)| age)
}

fn person<'code>() -> impl Parser<'code, Output = Person> {
    zip3(name(), removing_literal(", "), age()).map(|(name, (), age)| Person { name, age })
}

#[test]
fn test_person_end_to_end() {
    init();
    let (person, rest) = person().run("name: John, age: 90").unwrap();
    assert_eq!(
        person,
        Person {
            name: "John".to_string(),
            age: 90
        }
    );
    assert_eq!(rest, "");
}

#[test]
fn test_person_trailing_input_is_returned() {
    init();
    let (person, rest) = person().run("name: Ada, age: 36; next").unwrap();
    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 36);
    assert_eq!(rest, "; next");
}

#[test]
fn test_person_bad_age_rolls_back_everything() {
    init();
    let mut cursor = Cursor::new("name: John, age: ninety");

    let err = person().parse(&mut cursor).unwrap_err();
    assert_eq!(
        err,
        ParseError::NotANumber {
            digits: "",
            remaining: "ninety"
        }
    );
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_person_missing_separator() {
    init();
    let err = person().run("name: John age: 90").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LiteralNotFound);
    assert_eq!(err.remaining(), Some(" age: 90"));
}

#[test]
fn test_people_in_either_order() {
    init();
    // Fields may come in either order; the first failing layout is rolled back
    let swapped = zip3(age(), removing_literal(", "), name())
        .map(|(age, (), name)| Person { name, age });
    let any_order = person().or(swapped);

    let (a, _) = any_order.run("name: Bo, age: 7").unwrap();
    let (b, _) = any_order.run("age: 7, name: Bo").unwrap();
    assert_eq!(a, b);
}

/// value := bool | int | "[" value "]"
fn value<'code>() -> SyncBoxedParser<'code, String> {
    choice(
        boolean().map(|b| b.to_string()).boxed_sync(),
        [
            int().map(|n| n.to_string()).boxed_sync(),
            zip3(removing_literal("["), lazy(value), removing_literal("]"))
                .map(|((), inner, ())| format!("[{}]", inner))
                .boxed_sync(),
        ],
    )
    .boxed_sync()
}

#[test]
fn test_parsers_shared_across_threads() {
    init();
    let parser = &person();
    let inputs = ["name: A, age: 1", "name: B, age: 2", "name: C, age: 3"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&input| scope.spawn(move || parser.run(input).map(|(p, _)| p.age)))
            .collect();
        let ages: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(ages, [1, 2, 3]);
    });
}

#[test]
fn test_boxed_recursive_grammar_shared_across_threads() {
    init();
    let parser = &value();
    let inputs = ["[[true]]", "42", "[False]"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&input| scope.spawn(move || parser.run(input).map(|(v, _)| v)))
            .collect();
        let values: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(values, ["[[true]]", "42", "[false]"]);
    });
}
