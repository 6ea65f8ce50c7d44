//! Integration tests for derive-ask

use std::any::Any;

use derive_ask::{Ask, Asker, Convert, ConvertFailed, TestBackend, TypeTag};

#[derive(Ask, Debug)]
struct Profile {
    #[ask]
    name: Option<String>,

    #[ask("How old are you?")]
    age: Option<i8>,

    skipped: String,

    #[ask("Are you sure?")]
    sure: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: None,
            age: None,
            skipped: "untouched".to_string(),
            sure: true,
        }
    }
}

#[test]
fn fills_a_record_from_scripted_input() {
    // name has no default: the empty line reprompts. age rejects "5x" with
    // the converter's message. sure defaults to true and "no" flips it.
    let backend = TestBackend::new().with_lines(["", "Alice", "", "5x", "7", "no"]);
    let mut asker = Asker::with_backend(backend);

    let profile = asker.ask(Profile::default()).unwrap();

    assert_eq!(profile.name.as_deref(), Some("Alice"));
    assert_eq!(profile.age, Some(7));
    assert!(!profile.sure);
    assert_eq!(profile.skipped, "untouched");

    let backend = asker.into_backend();
    assert_eq!(backend.remaining(), 0);
    let transcript = backend.transcript();
    assert!(transcript.contains("There's no default value, please try again!"));
    assert!(transcript.contains("Invalid value for: i8"));
    assert!(transcript.contains("How old are you?"));
    assert!(transcript.contains("[default: 'true']"));
}

#[test]
fn labeled_session_prints_a_header() {
    let backend = TestBackend::new().with_lines(["Alice", "30", "yes"]);
    let mut asker = Asker::with_backend(backend);
    asker.ask_labeled("User profile", Profile::default()).unwrap();

    assert!(
        asker
            .backend()
            .transcript()
            .starts_with("\nUser profile :\n")
    );
}

#[derive(Ask, Debug, Default)]
struct Address {
    #[ask("Street")]
    street: Option<String>,

    #[ask("City")]
    city: Option<String>,
}

#[derive(Ask, Debug, Default)]
struct Customer {
    #[ask("Name")]
    name: Option<String>,

    #[ask("Shipping address", recursive)]
    address: Option<Address>,
}

#[test]
fn recursive_field_runs_a_nested_session() {
    let backend = TestBackend::new().with_lines(["Alice", "Main St 1", "Springfield"]);
    let mut asker = Asker::with_backend(backend);

    let customer = asker.ask(Customer::default()).unwrap();

    let address = customer.address.expect("constructed and filled");
    assert_eq!(address.street.as_deref(), Some("Main St 1"));
    assert_eq!(address.city.as_deref(), Some("Springfield"));

    // the explicit label becomes the sub-session header
    assert!(
        asker
            .backend()
            .transcript()
            .contains("\nShipping address :\n")
    );
}

#[derive(Ask, Debug, Default)]
struct Wrapper {
    #[ask(recursive)]
    inner: Address,
}

#[test]
fn unlabeled_recursive_field_prints_no_header() {
    let backend = TestBackend::new().with_lines(["Main St 1", "Springfield"]);
    let mut asker = Asker::with_backend(backend);

    let wrapper = asker.ask(Wrapper::default()).unwrap();
    assert_eq!(wrapper.inner.street.as_deref(), Some("Main St 1"));

    // only the two field prompts, no record header line
    assert!(!asker.backend().transcript().contains(" :\n"));
}

#[derive(Ask, Debug, Default)]
struct Node {
    #[ask("Value")]
    value: Option<i32>,

    #[ask(recursive)]
    next: Option<Box<Node>>,
}

#[test]
fn self_referential_field_is_skipped() {
    // the recursive field has the record's own type and is downgraded;
    // only `value` is asked for, and the session terminates
    let backend = TestBackend::new().with_line("5");
    let mut asker = Asker::with_backend(backend);

    let node = asker.ask(Node::default()).unwrap();
    assert_eq!(node.value, Some(5));
    assert_eq!(asker.backend().remaining(), 0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Temperature {
    Cold,
    Warm,
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cold => write!(f, "cold"),
            Self::Warm => write!(f, "warm"),
        }
    }
}

struct ToTemperature;

impl Convert for ToTemperature {
    fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
        match raw.to_lowercase().as_str() {
            "cold" => Ok(Box::new(Temperature::Cold)),
            "warm" => Ok(Box::new(Temperature::Warm)),
            _ => Err(ConvertFailed::new("Invalid value for: Temperature")),
        }
    }

    fn matches(&self, requested: &TypeTag) -> bool {
        *requested == TypeTag::of::<Temperature>()
    }
}

#[derive(Ask, Debug, Default)]
struct Forecast {
    #[ask("Tomorrow will be")]
    tomorrow: Option<Temperature>,
}

#[test]
fn registered_converter_serves_custom_types() {
    let backend = TestBackend::new().with_lines(["tepid", "WARM"]);
    let mut asker = Asker::with_backend(backend);
    asker.register::<Temperature>(ToTemperature);

    let forecast = asker.ask(Forecast::default()).unwrap();
    assert_eq!(forecast.tomorrow, Some(Temperature::Warm));
    assert!(
        asker
            .backend()
            .transcript()
            .contains("Invalid value for: Temperature")
    );
}

#[test]
fn unregistered_type_is_skipped_entirely() {
    // no converter for Temperature: the field is downgraded, no prompt, and
    // the scripted input stays untouched
    let backend = TestBackend::new().with_line("warm");
    let mut asker = Asker::with_backend(backend);

    let forecast = asker.ask(Forecast::default()).unwrap();
    assert_eq!(forecast.tomorrow, None);
    assert_eq!(asker.backend().transcript(), "");
    assert_eq!(asker.backend().remaining(), 1);
}
