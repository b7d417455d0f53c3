//! User-defined types: an opaque identifier wrapped around a representation type.
//!
//! Native UDTs are implemented in Rust and located by class identifier through
//! an injected loader (see `coltype-json`). Foreign UDTs belong to another host
//! runtime; the engine only carries their identifiers and representation.

use std::fmt;
use std::sync::Arc;

use crate::datatype::DataType;

/// Implemented by every natively registered user-defined type.
pub trait UserDefinedType: fmt::Debug + Send + Sync {
    /// Identifier the type is registered under (e.g. `com.acme.PointUDT`).
    fn class_name(&self) -> &str;

    /// Underlying representation type used for storage and comparison.
    fn sql_type(&self) -> &DataType;

    /// Identifier of a companion implementation in a foreign runtime, if any.
    fn py_udt(&self) -> Option<&str> {
        None
    }

    fn type_name(&self) -> String {
        type_name_from_class(self.class_name())
    }
}

/// Either a native UDT instance or a foreign one carried by identifier.
#[derive(Debug, Clone)]
pub enum UserType {
    Native(Arc<dyn UserDefinedType>),
    Foreign(ForeignUdt),
}

impl UserType {
    pub fn native(udt: impl UserDefinedType + 'static) -> Self {
        UserType::Native(Arc::new(udt))
    }

    pub fn sql_type(&self) -> &DataType {
        match self {
            UserType::Native(udt) => udt.sql_type(),
            UserType::Foreign(udt) => &udt.sql_type,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            UserType::Native(udt) => udt.type_name(),
            UserType::Foreign(udt) => type_name_from_class(&udt.py_class),
        }
    }

    /// Same identifiers on both sides; representations are not compared.
    pub fn same_class(&self, other: &UserType) -> bool {
        match (self, other) {
            (UserType::Native(l), UserType::Native(r)) => l.class_name() == r.class_name(),
            (UserType::Foreign(l), UserType::Foreign(r)) => {
                l.py_class == r.py_class && l.serialized_class == r.serialized_class
            }
            _ => false,
        }
    }

    /// Relax the representation type's nullability, keeping the identifiers.
    ///
    /// A native UDT owns its representation, so a relaxed one is exposed
    /// through a view that delegates everything except `sql_type`. Already
    /// permissive UDTs come back as a plain clone.
    pub fn as_nullable(&self) -> UserType {
        let relaxed = self.sql_type().as_nullable();
        if relaxed == *self.sql_type() {
            return self.clone();
        }
        match self {
            UserType::Native(udt) => UserType::Native(Arc::new(RelaxedUdt {
                inner: Arc::clone(udt),
                sql_type: relaxed,
            })),
            UserType::Foreign(udt) => UserType::Foreign(ForeignUdt {
                sql_type: Box::new(relaxed),
                py_class: udt.py_class.clone(),
                serialized_class: udt.serialized_class.clone(),
            }),
        }
    }
}

/// Native UDT seen through a nullable representation.
#[derive(Debug)]
struct RelaxedUdt {
    inner: Arc<dyn UserDefinedType>,
    sql_type: DataType,
}

impl UserDefinedType for RelaxedUdt {
    fn class_name(&self) -> &str {
        self.inner.class_name()
    }

    fn sql_type(&self) -> &DataType {
        &self.sql_type
    }

    fn py_udt(&self) -> Option<&str> {
        self.inner.py_udt()
    }

    fn type_name(&self) -> String {
        self.inner.type_name()
    }
}

impl PartialEq for UserType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UserType::Native(l), UserType::Native(r)) => {
                l.class_name() == r.class_name() && l.sql_type() == r.sql_type()
            }
            (UserType::Foreign(l), UserType::Foreign(r)) => l == r,
            _ => false,
        }
    }
}

impl Eq for UserType {}

/// UDT owned by another runtime; never instantiated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignUdt {
    pub sql_type: Box<DataType>,
    pub py_class: String,
    pub serialized_class: String,
}

impl ForeignUdt {
    pub fn new(
        sql_type: DataType,
        py_class: impl Into<String>,
        serialized_class: impl Into<String>,
    ) -> Self {
        Self {
            sql_type: Box::new(sql_type),
            py_class: py_class.into(),
            serialized_class: serialized_class.into(),
        }
    }
}

/// `com.acme.PointUDT` -> `point`
fn type_name_from_class(class: &str) -> String {
    let simple = class
        .rsplit(['.', ':'])
        .next()
        .unwrap_or(class)
        .trim_end_matches('$');
    let simple = simple.strip_suffix("Type").unwrap_or(simple);
    let simple = simple.strip_suffix("UDT").unwrap_or(simple);
    simple.to_lowercase()
}
