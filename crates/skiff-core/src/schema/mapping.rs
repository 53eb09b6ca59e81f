use super::{Accessor, Descriptor, Entity, EntityType};
use crate::{stmt::Value, Error, Result};

use indexmap::IndexMap;
use std::{collections::HashSet, fmt};

/// How an entity type maps to a table.
///
/// Built once per type by the [`MappingCatalog`](super::MappingCatalog) and
/// immutable afterwards. Only members with a column appear here; transient
/// members are dropped during validation.
pub struct TypeMapping<E> {
    entity: EntityType,
    table: String,
    members: IndexMap<&'static str, MemberMapping<E>>,

    /// Index into `members`
    primary_key: Option<usize>,
}

pub struct MemberMapping<E> {
    name: &'static str,
    column: String,
    accessor: Accessor<E>,
}

impl<E: Entity> TypeMapping<E> {
    pub fn from_descriptor(descriptor: Descriptor<E>) -> Result<Self> {
        let entity = EntityType::of::<E>();

        let table = match descriptor.table {
            Some(table) if !table.is_empty() => table,
            _ => return Err(Error::no_table(entity.name())),
        };

        let mut names = HashSet::new();
        let mut columns = HashSet::new();
        let mut members = IndexMap::new();
        let mut primary_key = None;

        for member in descriptor.members {
            if !names.insert(member.name) {
                return Err(Error::invalid_schema(format!(
                    "entity type `{entity}` declares member `{}` more than once",
                    member.name
                )));
            }

            let (Some(column), Some(accessor)) = (member.column, member.accessor) else {
                if member.key {
                    return Err(Error::invalid_schema(format!(
                        "primary key `{}` of entity type `{entity}` has no column",
                        member.name
                    )));
                }

                continue;
            };

            if column.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "member `{}` of entity type `{entity}` has an empty column name",
                    member.name
                )));
            }

            if !columns.insert(column.clone()) {
                return Err(Error::invalid_schema(format!(
                    "column `{column}` is mapped more than once by entity type `{entity}`"
                )));
            }

            if member.key {
                if primary_key.is_some() {
                    return Err(Error::invalid_schema(format!(
                        "entity type `{entity}` declares more than one primary key"
                    )));
                }

                primary_key = Some(members.len());
            }

            members.insert(
                member.name,
                MemberMapping {
                    name: member.name,
                    column,
                    accessor,
                },
            );
        }

        Ok(Self {
            entity,
            table,
            members,
            primary_key,
        })
    }
}

impl<E> TypeMapping<E> {
    pub fn entity(&self) -> EntityType {
        self.entity
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the mapping of the named member, or `None` if the member is
    /// unknown or has no column.
    pub fn member(&self, name: &str) -> Option<&MemberMapping<E>> {
        self.members.get(name)
    }

    pub fn primary_key(&self) -> Option<&MemberMapping<E>> {
        self.primary_key
            .and_then(|index| self.members.get_index(index))
            .map(|(_, member)| member)
    }

    pub fn members(&self) -> impl ExactSizeIterator<Item = &MemberMapping<E>> + '_ {
        self.members.values()
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.members.values().map(|member| &member.column[..])
    }
}

impl<E> MemberMapping<E> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Reads the member's value from `instance`.
    pub fn value(&self, instance: &E) -> Value {
        (self.accessor)(instance)
    }
}

impl<E> PartialEq for TypeMapping<E> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
            && self.columns().eq(other.columns())
            && self.primary_key().map(MemberMapping::column)
                == other.primary_key().map(MemberMapping::column)
    }
}

impl<E> fmt::Debug for TypeMapping<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMapping")
            .field("entity", &self.entity)
            .field("table", &self.table)
            .field("members", &self.members)
            .field("primary_key", &self.primary_key().map(MemberMapping::name))
            .finish()
    }
}

impl<E> fmt::Debug for MemberMapping<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberMapping")
            .field("name", &self.name)
            .field("column", &self.column)
            .finish()
    }
}
