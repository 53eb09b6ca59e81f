mod catalog;
pub use catalog::MappingCatalog;

mod descriptor;
pub use descriptor::{Accessor, Descriptor, MemberDescriptor};

mod entity;
pub use entity::{Entity, EntityType};

mod mapping;
pub use mapping::{MemberMapping, TypeMapping};
