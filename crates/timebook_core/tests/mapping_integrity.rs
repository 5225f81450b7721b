use timebook_core::{
    EntityRef, GroupDescriptor, GroupId, PersonDescriptor, PersonId, Role, StoreError, TimeBook,
};

fn seeded() -> (TimeBook, Vec<PersonId>, Vec<GroupId>) {
    let mut book = TimeBook::new();
    let persons = ["Alice", "Bob", "Carol"]
        .iter()
        .map(|name| {
            book.add_person(&PersonDescriptor::new().with_name(*name))
                .unwrap()
                .id()
        })
        .collect();
    let groups = ["CS2103", "CS2101"]
        .iter()
        .map(|name| {
            book.add_group(&GroupDescriptor::new().with_name(*name))
                .unwrap()
                .id()
        })
        .collect();
    (book, persons, groups)
}

#[test]
fn walkthrough_add_duplicate_and_cascade() {
    let mut book = TimeBook::new();
    let alice = book
        .add_person(&PersonDescriptor::new().with_name("Alice"))
        .unwrap()
        .id();
    let group = book
        .add_group(&GroupDescriptor::new().with_name("CS2103"))
        .unwrap()
        .id();
    assert_eq!((alice.value(), group.value()), (0, 0));

    book.add_mapping(alice, group, Role::of("TA").unwrap())
        .unwrap();
    let err = book.add_mapping(alice, group, Role::empty()).unwrap_err();
    assert_eq!(
        err,
        StoreError::DuplicateMapping {
            person_id: alice,
            group_id: group
        }
    );
    assert_eq!(
        book.mappings().get(alice, group).unwrap().role(),
        &Role::of("TA").unwrap()
    );

    book.remove_person(alice).unwrap();
    assert!(book.list_mappings_for_group(group).unwrap().is_empty());
}

#[test]
fn dangling_references_are_rejected() {
    let (mut book, persons, groups) = seeded();

    let err = book
        .add_mapping(PersonId::new(99), groups[0], Role::empty())
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound(EntityRef::Person(PersonId::new(99))));

    let err = book
        .add_mapping(persons[0], GroupId::new(99), Role::empty())
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound(EntityRef::Group(GroupId::new(99))));
    assert!(book.list_mappings().is_empty());
}

#[test]
fn removed_person_cannot_gain_new_memberships() {
    let (mut book, persons, groups) = seeded();
    book.remove_person(persons[1]).unwrap();

    let err = book
        .add_mapping(persons[1], groups[0], Role::empty())
        .unwrap_err();
    assert_eq!(err, StoreError::NotFound(EntityRef::Person(persons[1])));
}

#[test]
fn removing_person_drops_exactly_their_mappings() {
    let (mut book, persons, groups) = seeded();
    for person in &persons {
        for group in &groups {
            book.add_mapping(*person, *group, Role::empty()).unwrap();
        }
    }
    assert_eq!(book.list_mappings().len(), 6);

    book.remove_person(persons[0]).unwrap();

    let remaining = book.list_mappings();
    assert_eq!(remaining.len(), 4);
    assert!(remaining.iter().all(|m| m.person_id() != persons[0]));
    assert_eq!(book.list_mappings_for_person(persons[1]).unwrap().len(), 2);
    assert_eq!(book.list_mappings_for_group(groups[0]).unwrap().len(), 2);
}

#[test]
fn removing_group_drops_exactly_its_mappings() {
    let (mut book, persons, groups) = seeded();
    book.add_mapping(persons[0], groups[0], Role::empty()).unwrap();
    book.add_mapping(persons[0], groups[1], Role::of("Lead").unwrap())
        .unwrap();
    book.add_mapping(persons[2], groups[1], Role::empty()).unwrap();

    book.remove_group(groups[1]).unwrap();

    let for_alice = book.list_mappings_for_person(persons[0]).unwrap();
    assert_eq!(for_alice.len(), 1);
    assert_eq!(for_alice[0].group_id(), groups[0]);
    assert!(book.list_mappings_for_person(persons[2]).unwrap().is_empty());
    assert_eq!(
        book.list_mappings_for_group(groups[1]).unwrap_err(),
        StoreError::NotFound(EntityRef::Group(groups[1]))
    );
}

#[test]
fn listings_follow_insertion_order() {
    let (mut book, persons, groups) = seeded();
    book.add_mapping(persons[2], groups[0], Role::empty()).unwrap();
    book.add_mapping(persons[0], groups[0], Role::empty()).unwrap();
    book.add_mapping(persons[1], groups[0], Role::empty()).unwrap();

    let members: Vec<PersonId> = book
        .list_mappings_for_group(groups[0])
        .unwrap()
        .iter()
        .map(|m| m.person_id())
        .collect();
    assert_eq!(members, [persons[2], persons[0], persons[1]]);
}

#[test]
fn set_role_and_remove_mapping() {
    let (mut book, persons, groups) = seeded();
    book.add_mapping(persons[0], groups[0], Role::empty()).unwrap();

    let updated = book
        .set_role(persons[0], groups[0], Role::of("Lead").unwrap())
        .unwrap();
    assert_eq!(updated.role().as_str(), Some("Lead"));
    assert_eq!(book.list_mappings().len(), 1);

    book.remove_mapping(persons[0], groups[0]).unwrap();
    assert_eq!(
        book.remove_mapping(persons[0], groups[0]).unwrap_err(),
        StoreError::NotFound(EntityRef::Mapping {
            person_id: persons[0],
            group_id: groups[0]
        })
    );
}

#[test]
fn empty_role_is_singular() {
    assert!(Role::of(" ").is_err());
    assert_eq!(Role::empty(), Role::default());
    assert_ne!(Role::of("Lead").unwrap(), Role::empty());
}

#[test]
fn every_edge_points_at_live_entities_after_mixed_removals() {
    let (mut book, persons, groups) = seeded();
    for person in &persons {
        for group in &groups {
            book.add_mapping(*person, *group, Role::empty()).unwrap();
        }
    }

    book.remove_person(persons[0]).unwrap();
    book.remove_group(groups[1]).unwrap();
    book.remove_mapping(persons[2], groups[0]).unwrap();

    assert_eq!(book.mappings().len(), 1);
    for edge in book.mappings().iter() {
        assert!(book.persons().contains(edge.person_id()));
        assert!(book.groups().contains(edge.group_id()));
    }
}
