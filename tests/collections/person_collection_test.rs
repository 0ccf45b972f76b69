use std::sync::Arc;
use vaccination_person::{
    AgeInterval, ModelCollection, Person, PersonCollection, PersonConfig, VaccinationError,
};

fn create_test_collection() -> PersonCollection {
    let config = PersonConfig::default().with_reference_year(2021);
    let mut persons = PersonCollection::with_config(config);
    persons.register("Ann", "Lee", "ABC123", 1990).unwrap();
    persons.register("John", "Doe", "999-99-9999", 2000).unwrap();
    persons.register("Maria", "Rossi", "MRS456", 1950).unwrap();
    persons
}

#[test]
fn test_duplicate_ssn_rejected() {
    let mut persons = create_test_collection();
    let result = persons.add(Person::new("Other", "Name", "ABC123", 1970));

    assert!(matches!(result, Err(VaccinationError::DuplicateSsn(ssn)) if ssn == "ABC123"));
    assert_eq!(persons.count(), 3);

    let kept = persons.get("ABC123").unwrap();
    assert_eq!(kept.first(), "Ann");
}

#[test]
fn test_allocation_partitions() {
    let mut persons = create_test_collection();
    assert!(persons.allocated().is_empty());
    assert_eq!(persons.unallocated().len(), 3);

    persons.mark_allocated("MRS456").unwrap();
    persons.mark_allocated("MRS456").unwrap();
    persons.mark_allocated("ABC123").unwrap();

    let allocated: Vec<&str> = persons.allocated().iter().map(|p| p.ssn()).collect();
    assert_eq!(allocated, vec!["ABC123", "MRS456"]);

    persons.clear_allocated("ABC123").unwrap();
    let waiting: Vec<&str> = persons.unallocated().iter().map(|p| p.ssn()).collect();
    assert_eq!(waiting, vec!["999-99-9999", "ABC123"]);
}

#[test]
fn test_unknown_ssn_errors() {
    let mut persons = create_test_collection();
    assert!(matches!(
        persons.clear_allocated("nobody"),
        Err(VaccinationError::UnknownSsn(_))
    ));
    assert!(persons.get_mut("nobody").is_none());
    assert!(!persons.contains("nobody"));
}

#[test]
fn test_assign_interval() {
    let mut persons = create_test_collection();
    let interval = Arc::new(AgeInterval::new(70, 80));

    persons
        .assign_interval("MRS456", Some(Arc::clone(&interval)))
        .unwrap();
    let person = persons.get("MRS456").unwrap();
    assert!(Arc::ptr_eq(person.age_interval().unwrap(), &interval));

    persons.assign_interval("MRS456", None).unwrap();
    assert!(persons.get("MRS456").unwrap().age_interval().is_none());
}

#[test]
fn test_render_lines_sorted_by_ssn() {
    let persons = create_test_collection();
    assert_eq!(
        persons.render_lines(),
        vec!["999-99-9999,John,Doe", "ABC123,Ann,Lee", "MRS456,Maria,Rossi"]
    );
}

#[test]
fn test_filter_and_ages() {
    let persons = create_test_collection();
    let over_sixty = persons.filter(|person| person.age() > 60);
    assert_eq!(over_sixty.len(), 1);
    assert_eq!(over_sixty[0].age(), 71);
    assert_eq!(persons.all().len(), 3);
    assert!(!persons.is_empty());
    assert_eq!(persons.iter().count(), 3);
}

#[test]
fn test_get_mut_changes_person() {
    let mut persons = create_test_collection();
    if let Some(person) = persons.get_mut("999-99-9999") {
        person.mark_allocated();
    }
    assert!(persons.get("999-99-9999").unwrap().is_allocated());
}
