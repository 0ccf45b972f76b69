use std::sync::Arc;
use vaccination_person::config::current_year;
use vaccination_person::{AgeInterval, AllocationStatus, Person};

#[test]
fn test_person_scenario() {
    let mut person = Person::new("John", "Doe", "999-99-9999", 2000);
    assert_eq!(person.age(), current_year() - 2000);

    person.mark_allocated();
    assert!(person.is_allocated());

    person.clear_allocated();
    assert!(!person.is_allocated());
}

#[test]
fn test_person_accessors() {
    let person = Person::new("Ann", "Lee", "ABC123", 1990);
    assert_eq!(person.first(), "Ann");
    assert_eq!(person.last(), "Lee");
    assert_eq!(person.ssn(), "ABC123");
    assert_eq!(person.birthyear(), 1990);
    assert_eq!(person.full_name(), "Ann Lee");
    assert_eq!(person.allocation_status(), AllocationStatus::Unallocated);
}

#[test]
fn test_person_rendering() {
    let person = Person::new("Ann", "Lee", "ABC123", 1990);
    assert_eq!(person.to_string(), "ABC123,Ann,Lee");
    assert_eq!(format!("{person}"), "ABC123,Ann,Lee");
}

#[test]
fn test_age_is_not_recomputed() {
    // Same birth year, different construction years
    let earlier = Person::with_reference_year("Ann", "Lee", "A1", 1990, 2020);
    let later = Person::with_reference_year("Ann", "Lee", "A2", 1990, 2021);
    assert_eq!(earlier.age(), 30);
    assert_eq!(later.age(), 31);

    let decoded = Person::from_json(&earlier.to_json().unwrap()).unwrap();
    assert_eq!(decoded.age(), 30);
}

#[test]
fn test_interval_shared_between_persons() {
    let interval = Arc::new(AgeInterval::new(30, 40));
    let mut ann = Person::new("Ann", "Lee", "ABC123", 1990);
    let mut bob = Person::new("Bob", "Ray", "DEF456", 1988);

    ann.set_age_interval(Some(Arc::clone(&interval)));
    bob.set_age_interval(Some(Arc::clone(&interval)));

    assert!(Arc::ptr_eq(ann.age_interval().unwrap(), bob.age_interval().unwrap()));
    assert_eq!(Arc::strong_count(&interval), 3);

    ann.set_age_interval(None);
    assert!(ann.age_interval().is_none());
    assert_eq!(Arc::strong_count(&interval), 2);
}

#[test]
fn test_allocation_does_not_touch_interval() {
    let interval = Arc::new(AgeInterval::open_ended(90));
    let mut person = Person::new("Ann", "Lee", "ABC123", 1930);
    person.set_age_interval(Some(Arc::clone(&interval)));

    person.mark_allocated();
    person.clear_allocated();

    assert!(Arc::ptr_eq(person.age_interval().unwrap(), &interval));
    assert_eq!(person.age_interval().unwrap().to_string(), "[90,+)");
}
