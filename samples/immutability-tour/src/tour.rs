//! The walk-through itself.
//!
//! Each step tries to change a `Person` from the outside and records how the
//! person renders afterwards. Steps are returned as data so the binary can
//! print them and the tests can check them.

use immutable_record::composite::{Address, AddressHandle};
use immutable_record::frozen::FrozenPerson;
use immutable_record::record::Person;

use crate::config::TourConfig;

/// One observation made during the tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// What was just attempted.
    pub label: &'static str,
    /// Rendering of the value after the attempt.
    pub rendering: String,
}

impl Observation {
    fn new(label: &'static str, rendering: impl ToString) -> Self {
        Self {
            label,
            rendering: rendering.to_string(),
        }
    }
}

/// Runs every step and returns the observations in order.
pub fn run(config: &TourConfig) -> Vec<Observation> {
    let mut observations = copy_in_copy_out(config);
    observations.extend(identity_check(config));
    observations.extend(frozen_alternative(config));
    observations
}

/// Mutates the original address, then a copy returned by the accessor.
fn copy_in_copy_out(config: &TourConfig) -> Vec<Observation> {
    let mut address = Address::new(config.street.as_str(), config.city.as_str());
    let person = Person::new(config.person_id, config.person_name.as_str(), &address);
    tracing::debug!(%person, "person constructed");

    let before = Observation::new("Before modification", &person);

    address.set_street(config.changed_street.as_str());
    tracing::debug!(%address, "original address modified");
    let after_original = Observation::new("After modifying original address object", &person);

    person.address().set_city(config.changed_city.as_str());
    let after_getter = Observation::new("After modifying via getter", &person);

    vec![before, after_original, after_getter]
}

/// Shows that the person's address is never the caller's instance.
fn identity_check(config: &TourConfig) -> Vec<Observation> {
    let original = AddressHandle::new(Address::new(config.street.as_str(), config.city.as_str()));
    let person = Person::from_handle(config.person_id, config.person_name.as_str(), &original);
    let returned = person.address_handle();

    vec![
        Observation::new("Original Address Object", &original),
        Observation::new("Person's Address Object", &returned),
        Observation::new(
            "Are they the same object?",
            AddressHandle::ptr_eq(&original, &returned),
        ),
    ]
}

/// Replays the city change on a frozen person, where it yields a new value.
fn frozen_alternative(config: &TourConfig) -> Vec<Observation> {
    let frozen = FrozenPerson::from(&Person::new(
        config.person_id,
        config.person_name.as_str(),
        &Address::new(config.street.as_str(), config.city.as_str()),
    ));
    let moved = frozen.with_address(frozen.address().with_city(config.changed_city.as_str()));
    tracing::debug!(%frozen, %moved, "frozen person updated functionally");

    vec![
        Observation::new("Frozen person", &frozen),
        Observation::new("Frozen person with new city", &moved),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rendering_of<'a>(observations: &'a [Observation], label: &str) -> &'a str {
        observations
            .iter()
            .find(|observation| observation.label == label)
            .map(|observation| observation.rendering.as_str())
            .unwrap()
    }

    #[rstest]
    fn person_never_changes_during_the_tour() {
        let observations = run(&TourConfig::default());
        let expected =
            "Person [id=25, name=John, address=Address [street=Main Street, city=New York]]";

        assert_eq!(rendering_of(&observations, "Before modification"), expected);
        assert_eq!(
            rendering_of(&observations, "After modifying original address object"),
            expected
        );
        assert_eq!(rendering_of(&observations, "After modifying via getter"), expected);
    }

    #[rstest]
    fn identity_check_reports_distinct_objects() {
        let observations = run(&TourConfig::default());

        assert_eq!(
            rendering_of(&observations, "Original Address Object"),
            rendering_of(&observations, "Person's Address Object")
        );
        assert_eq!(rendering_of(&observations, "Are they the same object?"), "false");
    }

    #[rstest]
    fn frozen_update_builds_a_new_person() {
        let observations = run(&TourConfig::default());

        assert!(rendering_of(&observations, "Frozen person").contains("city=New York"));
        assert!(
            rendering_of(&observations, "Frozen person with new city").contains("city=Los Angeles")
        );
    }
}
