//! Typed on-disk schema and snapshot conversion.
//!
//! # Invariants
//! - Field and section names are stable within one format version.
//! - Unset optional fields and the empty role are omitted, never `null`.
//! - Unknown fields are ignored on read.

use crate::model::descriptor::{GroupDescriptor, PersonDescriptor};
use crate::model::group::Group;
use crate::model::id::{GroupId, PersonId};
use crate::model::mapping::Mapping;
use crate::model::person::Person;
use crate::model::role::Role;
use crate::storage::error::CorruptedDataError;
use crate::store::group_store::GroupStore;
use crate::store::mapping_store::MappingStore;
use crate::store::person_store::PersonStore;
use crate::store::timebook::TimeBook;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whole persisted timebook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBookDocument {
    pub persons: Vec<PersonRecord>,
    pub groups: Vec<GroupRecord>,
    pub mappings: Vec<MappingRecord>,
    /// Person allocator watermark. Older files may omit it.
    #[serde(default)]
    pub next_person_id: u64,
    /// Group allocator watermark. Older files may omit it.
    #[serde(default)]
    pub next_group_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: GroupId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// One membership edge. An absent, `null` or `""` role is the empty role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub person_id: PersonId,
    pub group_id: GroupId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Captures every entity, edge and allocator watermark of `book`.
pub fn export_snapshot(book: &TimeBook) -> TimeBookDocument {
    TimeBookDocument {
        persons: book.persons().iter().map(person_record).collect(),
        groups: book.groups().iter().map(group_record).collect(),
        mappings: book.mappings().iter().map(mapping_record).collect(),
        next_person_id: book.persons().watermark(),
        next_group_id: book.groups().watermark(),
    }
}

/// Rebuilds a `TimeBook` from `document`, validating all of it first.
///
/// # Errors
/// - Duplicate ids within persons or groups.
/// - Missing/blank required fields, blank optional fields or roles.
/// - Duplicate group names or duplicate `(personId, groupId)` pairs.
/// - Mappings referencing a person or group absent from the document.
/// - Ids or watermarks of `u64::MAX`, which leave no next id to allocate.
pub fn import_snapshot(document: TimeBookDocument) -> Result<TimeBook, CorruptedDataError> {
    let TimeBookDocument {
        persons,
        groups,
        mappings,
        next_person_id,
        next_group_id,
    } = document;

    ensure_room_after("nextPersonId", next_person_id)?;
    ensure_room_after("nextGroupId", next_group_id)?;
    let persons = import_persons(persons)?;
    let groups = import_groups(groups)?;
    let person_ids: HashSet<PersonId> = persons.iter().map(Person::id).collect();
    let group_ids: HashSet<GroupId> = groups.iter().map(Group::id).collect();
    let mappings = import_mappings(mappings, &person_ids, &group_ids)?;

    Ok(TimeBook::from_parts(
        PersonStore::restore(persons, next_person_id),
        GroupStore::restore(groups, next_group_id),
        MappingStore::restore(mappings),
    ))
}

fn person_record(person: &Person) -> PersonRecord {
    PersonRecord {
        id: person.id(),
        name: Some(person.name().to_string()),
        phone: person.phone().map(str::to_string),
        email: person.email().map(str::to_string),
        address: person.address().map(str::to_string),
        remark: person.remark().map(str::to_string),
    }
}

fn group_record(group: &Group) -> GroupRecord {
    GroupRecord {
        id: group.id(),
        name: Some(group.name().to_string()),
        remark: group.remark().map(str::to_string),
    }
}

fn mapping_record(mapping: &Mapping) -> MappingRecord {
    MappingRecord {
        person_id: mapping.person_id(),
        group_id: mapping.group_id(),
        role: mapping.role().as_str().map(str::to_string),
    }
}

fn ensure_room_after(field: &str, raw: u64) -> Result<(), CorruptedDataError> {
    if raw == u64::MAX {
        return Err(CorruptedDataError::new(format!(
            "{field} {raw} leaves no room for another id"
        )));
    }
    Ok(())
}

fn import_persons(records: Vec<PersonRecord>) -> Result<Vec<Person>, CorruptedDataError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut persons = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id;
        ensure_room_after("person id", id.value())?;
        if !seen.insert(id) {
            return Err(CorruptedDataError::new(format!("duplicate person id {id}")));
        }
        let descriptor = PersonDescriptor {
            name: record.name,
            phone: record.phone,
            email: record.email,
            address: record.address,
            remark: record.remark,
        };
        let person = Person::from_descriptor(id, &descriptor)
            .map_err(|err| CorruptedDataError::new(format!("person {id}: {err}")))?;
        persons.push(person);
    }
    Ok(persons)
}

fn import_groups(records: Vec<GroupRecord>) -> Result<Vec<Group>, CorruptedDataError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut names = HashSet::with_capacity(records.len());
    let mut groups = Vec::with_capacity(records.len());
    for record in records {
        let id = record.id;
        ensure_room_after("group id", id.value())?;
        if !seen.insert(id) {
            return Err(CorruptedDataError::new(format!("duplicate group id {id}")));
        }
        let descriptor = GroupDescriptor {
            name: record.name,
            remark: record.remark,
        };
        let group = Group::from_descriptor(id, &descriptor)
            .map_err(|err| CorruptedDataError::new(format!("group {id}: {err}")))?;
        if !names.insert(group.name().to_string()) {
            return Err(CorruptedDataError::new(format!(
                "group {id}: duplicate group name"
            )));
        }
        groups.push(group);
    }
    Ok(groups)
}

fn import_mappings(
    records: Vec<MappingRecord>,
    person_ids: &HashSet<PersonId>,
    group_ids: &HashSet<GroupId>,
) -> Result<Vec<Mapping>, CorruptedDataError> {
    let mut pairs = HashSet::with_capacity(records.len());
    let mut mappings = Vec::with_capacity(records.len());
    for record in records {
        let (person_id, group_id) = (record.person_id, record.group_id);
        if !person_ids.contains(&person_id) {
            return Err(CorruptedDataError::new(format!(
                "mapping references unknown person {person_id}"
            )));
        }
        if !group_ids.contains(&group_id) {
            return Err(CorruptedDataError::new(format!(
                "mapping references unknown group {group_id}"
            )));
        }
        if !pairs.insert((person_id, group_id)) {
            return Err(CorruptedDataError::new(format!(
                "duplicate mapping person {person_id} -> group {group_id}"
            )));
        }
        let role = match record.role.as_deref() {
            None | Some("") => Role::empty(),
            Some(text) => Role::of(text).map_err(|err| {
                CorruptedDataError::new(format!(
                    "mapping person {person_id} -> group {group_id}: {err}"
                ))
            })?,
        };
        mappings.push(Mapping::new(person_id, group_id, role));
    }
    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::{export_snapshot, import_snapshot, TimeBookDocument};
    use crate::model::descriptor::{GroupDescriptor, PersonDescriptor};
    use crate::model::role::Role;
    use crate::store::timebook::TimeBook;
    use serde_json::json;

    #[test]
    fn export_omits_unset_fields_and_empty_roles() {
        let mut book = TimeBook::new();
        let alice = book
            .add_person(&PersonDescriptor::new().with_name("Alice"))
            .unwrap()
            .id();
        let group = book
            .add_group(&GroupDescriptor::new().with_name("CS2103"))
            .unwrap()
            .id();
        book.add_mapping(alice, group, Role::empty()).unwrap();

        let value = serde_json::to_value(export_snapshot(&book)).unwrap();
        assert_eq!(
            value,
            json!({
                "persons": [{ "id": 0, "name": "Alice" }],
                "groups": [{ "id": 0, "name": "CS2103" }],
                "mappings": [{ "personId": 0, "groupId": 0 }],
                "nextPersonId": 1,
                "nextGroupId": 1
            })
        );
    }

    #[test]
    fn import_accepts_explicit_empty_role_and_ignores_unknown_fields() {
        let document: TimeBookDocument = serde_json::from_value(json!({
            "persons": [{ "id": 3, "name": "Alice", "nickname": "al" }],
            "groups": [{ "id": 1, "name": "CS2103" }],
            "mappings": [{ "personId": 3, "groupId": 1, "role": "" }],
            "schemaComment": "ignored"
        }))
        .unwrap();

        let book = import_snapshot(document).unwrap();
        let mappings = book.list_mappings();
        assert_eq!(mappings.len(), 1);
        assert!(mappings[0].role().is_empty());
        assert_eq!(book.persons().watermark(), 4);
        assert_eq!(book.groups().watermark(), 2);
    }

    #[test]
    fn import_rejects_whitespace_role() {
        let document: TimeBookDocument = serde_json::from_value(json!({
            "persons": [{ "id": 0, "name": "Alice" }],
            "groups": [{ "id": 0, "name": "CS2103" }],
            "mappings": [{ "personId": 0, "groupId": 0, "role": "   " }]
        }))
        .unwrap();

        let err = import_snapshot(document).unwrap_err();
        assert!(err.reason().contains("role must not be blank"), "{err}");
    }
}
