//! Field references and resolution inputs.
//!
//! A [`TableField`] is a declared column bound to its owning table. A
//! resolved [`Field`] is what query construction consumes: either a
//! plain column reference or an opaque computed expression supplied by
//! the caller. [`FieldArg`] and [`SelectArg`] are the loosely-typed
//! inputs accepted by [`Model::resolve`](crate::Model::resolve) and
//! [`Model::select`](crate::Model::select).

use sea_query::{Alias, ColumnRef, DynIden, IntoIden, SimpleExpr};

/// A declared column belonging to a specific table.
///
/// Created by the model when a `columns` option is applied; semantically
/// "column named Y on table X". It has no lifecycle of its own beyond
/// the model that registered it.
#[derive(Debug, Clone)]
pub struct TableField {
    table: DynIden,
    column: DynIden,
    name: String,
}

impl TableField {
    pub(crate) fn new(table: DynIden, name: impl Into<String>) -> Self {
        let name = name.into();
        let column = Alias::new(&name).into_iden();
        Self {
            table,
            column,
            name,
        }
    }

    /// Returns the declared column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column identifier without its table qualifier.
    pub fn column_iden(&self) -> DynIden {
        self.column.clone()
    }

    /// Returns the table-qualified column reference.
    pub fn column_ref(&self) -> ColumnRef {
        ColumnRef::TableColumn(self.table.clone(), self.column.clone())
    }
}

/// A resolved field reference, ready for use in a select list.
#[derive(Debug, Clone)]
pub enum Field {
    /// A declared column of the model's table.
    Column(TableField),
    /// An opaque computed expression (aggregate, arithmetic, ...).
    ///
    /// Resolution passes these through untouched; the model never
    /// inspects what the expression does.
    Computed(SimpleExpr),
}

impl Field {
    /// Returns the underlying declared column, if this is one.
    pub fn as_column(&self) -> Option<&TableField> {
        match self {
            Field::Column(field) => Some(field),
            Field::Computed(_) => None,
        }
    }
}

/// Input accepted by field resolution.
///
/// The closed set of variants a caller may hand to
/// [`Model::resolve`](crate::Model::resolve): an opaque computed
/// expression, an already-resolved field, or a column name to look up
/// in the model's registry. Only the name variant can fail to resolve.
#[derive(Debug, Clone)]
pub enum FieldArg {
    /// An externally-built expression, passed through unchanged.
    Computed(SimpleExpr),
    /// An already-resolved field, passed through unchanged.
    Field(Field),
    /// A column name, resolved against the model's registry.
    Name(String),
}

impl From<&str> for FieldArg {
    fn from(name: &str) -> Self {
        FieldArg::Name(name.to_string())
    }
}

impl From<String> for FieldArg {
    fn from(name: String) -> Self {
        FieldArg::Name(name)
    }
}

impl From<SimpleExpr> for FieldArg {
    fn from(expr: SimpleExpr) -> Self {
        FieldArg::Computed(expr)
    }
}

impl From<Field> for FieldArg {
    fn from(field: Field) -> Self {
        FieldArg::Field(field)
    }
}

impl From<TableField> for FieldArg {
    fn from(field: TableField) -> Self {
        FieldArg::Field(Field::Column(field))
    }
}

/// One element of a select list.
///
/// Either a single field-resolvable value or an ordered sequence of
/// column names, each of which is resolved individually.
#[derive(Debug, Clone)]
pub enum SelectArg {
    /// A single field-resolvable value.
    Field(FieldArg),
    /// An ordered sequence of column names.
    Names(Vec<String>),
}

impl From<FieldArg> for SelectArg {
    fn from(arg: FieldArg) -> Self {
        SelectArg::Field(arg)
    }
}

impl From<&str> for SelectArg {
    fn from(name: &str) -> Self {
        SelectArg::Field(name.into())
    }
}

impl From<String> for SelectArg {
    fn from(name: String) -> Self {
        SelectArg::Field(name.into())
    }
}

impl From<SimpleExpr> for SelectArg {
    fn from(expr: SimpleExpr) -> Self {
        SelectArg::Field(expr.into())
    }
}

impl From<Field> for SelectArg {
    fn from(field: Field) -> Self {
        SelectArg::Field(field.into())
    }
}

impl From<TableField> for SelectArg {
    fn from(field: TableField) -> Self {
        SelectArg::Field(field.into())
    }
}

impl From<Vec<String>> for SelectArg {
    fn from(names: Vec<String>) -> Self {
        SelectArg::Names(names)
    }
}

impl From<Vec<&str>> for SelectArg {
    fn from(names: Vec<&str>) -> Self {
        SelectArg::Names(names.into_iter().map(str::to_string).collect())
    }
}
