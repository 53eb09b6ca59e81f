use crate::stmt::Value;

use std::fmt;

/// Reads a member's current value from an instance.
pub type Accessor<E> = fn(&E) -> Value;

/// Declarative description of how an entity type maps to a table.
///
/// ```
/// # use skiff_core::schema::Descriptor;
/// # use skiff_core::stmt::Value;
/// struct Customer {
///     id: i64,
///     name: String,
/// }
///
/// let descriptor = Descriptor::<Customer>::new()
///     .table("Customer")
///     .key("id", "Id", |c| Value::from(c.id))
///     .column("name", "Name", |c| Value::from(&c.name));
///
/// assert_eq!(Some("Customer"), descriptor.table_name());
/// ```
pub struct Descriptor<E> {
    pub(crate) table: Option<String>,
    pub(crate) members: Vec<MemberDescriptor<E>>,
}

/// One member of a [`Descriptor`].
pub struct MemberDescriptor<E> {
    /// Name used in diagnostics and predicate lookup
    pub name: &'static str,

    /// Column the member persists to. `None` for transient members.
    pub column: Option<String>,

    /// True when the member is the primary key
    pub key: bool,

    pub accessor: Option<Accessor<E>>,
}

impl<E> Descriptor<E> {
    pub fn new() -> Self {
        Self {
            table: None,
            members: vec![],
        }
    }

    /// Sets the table the type is stored in.
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    pub fn column(
        mut self,
        name: &'static str,
        column: impl Into<String>,
        accessor: Accessor<E>,
    ) -> Self {
        self.members.push(MemberDescriptor {
            name,
            column: Some(column.into()),
            key: false,
            accessor: Some(accessor),
        });
        self
    }

    /// Adds the primary key member.
    pub fn key(
        mut self,
        name: &'static str,
        column: impl Into<String>,
        accessor: Accessor<E>,
    ) -> Self {
        self.members.push(MemberDescriptor {
            name,
            column: Some(column.into()),
            key: true,
            accessor: Some(accessor),
        });
        self
    }

    /// Adds a member that has no column.
    pub fn transient(mut self, name: &'static str) -> Self {
        self.members.push(MemberDescriptor {
            name,
            column: None,
            key: false,
            accessor: None,
        });
        self
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn members(&self) -> &[MemberDescriptor<E>] {
        &self.members
    }
}

impl<E> Default for Descriptor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Descriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("table", &self.table)
            .field("members", &self.members)
            .finish()
    }
}

impl<E> fmt::Debug for MemberDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("key", &self.key)
            .finish()
    }
}
