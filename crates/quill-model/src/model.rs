//! Table models.
//!
//! A [`Model`] owns one table's identity and a registry of its declared
//! columns. It resolves heterogeneous field references and hands query
//! construction off to sea-query builders bound to the table; it never
//! executes anything itself.

use std::collections::HashMap;

use sea_query::{
    Alias, DeleteStatement, DynIden, InsertStatement, IntoIden, Query, SelectStatement,
    SimpleExpr, UpdateStatement,
};

use quill_common::{ModelError, ModelResult};

use crate::field::{Field, FieldArg, SelectArg, TableField};

/// A configuration option applied while constructing a [`Model`].
///
/// Options are order-sensitive registry mutators: applying them in a
/// different order can produce a different registry. When a later
/// option registers a name that is already present, the later
/// descriptor wins; no duplicate detection is performed.
#[derive(Debug, Clone)]
pub enum ModelOption {
    /// Registers one plain column descriptor per name.
    Columns(Vec<String>),
}

impl ModelOption {
    /// Creates a `Columns` option from any iterable of names.
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModelOption::Columns(names.into_iter().map(Into::into).collect())
    }

    fn apply(self, model: &mut Model) {
        match self {
            ModelOption::Columns(names) => {
                for name in names {
                    let field = TableField::new(model.table.clone(), &name);
                    model.fields.insert(name, field);
                }
            }
        }
    }
}

/// A model of one relational table.
///
/// Built once, immutable afterwards, and therefore safe to share across
/// threads for resolution and query construction.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    table: DynIden,
    fields: HashMap<String, TableField>,
}

impl Model {
    /// Builds a model for `table`, applying each option in order.
    pub fn new<T, I>(table: T, options: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = ModelOption>,
    {
        let name = table.into();
        let mut model = Self {
            table: Alias::new(&name).into_iden(),
            name,
            fields: HashMap::new(),
        };

        for option in options {
            option.apply(&mut model);
        }

        tracing::debug!(
            table = %model.name,
            fields = model.fields.len(),
            "table model constructed"
        );

        model
    }

    /// Returns the table identifier string.
    pub fn table_name(&self) -> &str {
        &self.name
    }

    /// Returns the raw table identity handle.
    ///
    /// For callers and builder integrations that need the table itself
    /// rather than the model's higher-level API.
    pub fn table_iden(&self) -> DynIden {
        self.table.clone()
    }

    /// Returns the names of all registered columns, in no particular order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the declared column descriptor for `name`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownColumn`] if the name is not registered.
    pub fn field(&self, name: &str) -> ModelResult<TableField> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| ModelError::unknown_column(name, &self.name))
    }

    /// Resolves a heterogeneous field reference.
    ///
    /// Computed expressions and already-resolved fields pass through
    /// unchanged; names are looked up in the registry by exact match.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownColumn`] when a name has no registry match.
    /// This is a programmer-error class: callers are expected to let it
    /// propagate to their process-level error boundary, not retry it.
    pub fn resolve(&self, arg: impl Into<FieldArg>) -> ModelResult<Field> {
        match arg.into() {
            FieldArg::Computed(expr) => Ok(Field::Computed(expr)),
            FieldArg::Field(field) => Ok(field),
            FieldArg::Name(name) => self.field(&name).map(Field::Column),
        }
    }

    /// Constructs a select statement over this table.
    ///
    /// Every element (and every name inside a name sequence) is passed
    /// through [`resolve`](Self::resolve) before being added to the
    /// select list.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownColumn`] if any element fails to resolve;
    /// no statement is produced in that case.
    pub fn select<I>(&self, fields: I) -> ModelResult<SelectStatement>
    where
        I: IntoIterator,
        I::Item: Into<SelectArg>,
    {
        let mut resolved = Vec::new();
        for arg in fields {
            match arg.into() {
                SelectArg::Names(names) => {
                    for name in names {
                        resolved.push(self.resolve(name)?);
                    }
                }
                SelectArg::Field(arg) => resolved.push(self.resolve(arg)?),
            }
        }

        let mut stmt = Query::select();
        stmt.from(self.table.clone());
        for field in resolved {
            match field {
                Field::Column(column) => {
                    stmt.column(column.column_ref());
                }
                Field::Computed(expr) => {
                    stmt.expr(expr);
                }
            }
        }

        Ok(stmt)
    }

    /// Constructs an insert statement over this table with the given
    /// column list. Values are supplied by the caller on the returned
    /// builder.
    pub fn insert<I>(&self, fields: I) -> InsertStatement
    where
        I: IntoIterator<Item = TableField>,
    {
        let mut stmt = Query::insert();
        stmt.into_table(self.table.clone())
            .columns(fields.into_iter().map(|field| field.column_iden()));
        stmt
    }

    /// Constructs an update statement bound to this table.
    pub fn update(&self) -> UpdateStatement {
        let mut stmt = Query::update();
        stmt.table(self.table.clone());
        stmt
    }

    /// Constructs a delete statement over this table.
    ///
    /// At least one condition is required by the signature; further
    /// conditions are ANDed on. An unconditional delete has to be
    /// spelled out manually with the query builder.
    pub fn delete<I>(&self, cond: SimpleExpr, more: I) -> DeleteStatement
    where
        I: IntoIterator<Item = SimpleExpr>,
    {
        let mut stmt = Query::delete();
        stmt.from_table(self.table.clone()).and_where(cond);
        for cond in more {
            stmt.and_where(cond);
        }
        stmt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::{Expr, Func, PostgresQueryBuilder};

    fn users() -> Model {
        Model::new("users", [ModelOption::columns(["id", "name"])])
    }

    fn render_field(model: &Model, field: Field) -> String {
        let mut stmt = Query::select();
        stmt.from(model.table_iden());
        match field {
            Field::Column(column) => {
                stmt.column(column.column_ref());
            }
            Field::Computed(expr) => {
                stmt.expr(expr);
            }
        }
        stmt.to_string(PostgresQueryBuilder)
    }

    #[test]
    fn test_table_identity() {
        let model = Model::new("accounts", []);
        assert_eq!(model.table_name(), "accounts");
        assert_eq!(model.field_names().count(), 0);
    }

    #[test]
    fn test_resolve_registered_name() {
        let model = users();
        let field = model.resolve("id").unwrap();
        assert_eq!(
            render_field(&model, field),
            r#"SELECT "users"."id" FROM "users""#
        );
    }

    #[test]
    fn test_resolve_unknown_name() {
        let model = users();
        let err = model.resolve("nope").unwrap_err();
        let message = err.to_string();
        assert!(message.contains(r#""nope""#));
        assert!(message.contains(r#""users""#));
    }

    #[test]
    fn test_resolve_is_identity_for_resolved_fields() {
        let model = users();
        let field = model.resolve("name").unwrap();
        let again = model.resolve(field.clone()).unwrap();
        assert_eq!(
            render_field(&model, field),
            render_field(&model, again)
        );
    }

    #[test]
    fn test_resolve_passes_computed_fields_through() {
        let model = users();
        let expr: SimpleExpr = Func::count(Expr::col(model.field("id").unwrap().column_ref())).into();
        let field = model.resolve(expr).unwrap();
        assert!(field.as_column().is_none());
        assert_eq!(
            render_field(&model, field),
            r#"SELECT COUNT("users"."id") FROM "users""#
        );
    }

    #[test]
    fn test_columns_option_last_write_wins() {
        let model = Model::new(
            "users",
            [
                ModelOption::columns(["id", "name"]),
                ModelOption::columns(["name"]),
            ],
        );
        assert_eq!(model.field_names().count(), 2);
        assert!(model.field("name").is_ok());
    }

    #[test]
    fn test_select_with_names() {
        let sql = users()
            .select(["id", "name"])
            .unwrap()
            .to_string(PostgresQueryBuilder);
        assert_eq!(sql, r#"SELECT "users"."id", "users"."name" FROM "users""#);
    }

    #[test]
    fn test_select_with_name_sequence() {
        let sql = users()
            .select([SelectArg::from(vec!["id", "name"])])
            .unwrap()
            .to_string(PostgresQueryBuilder);
        assert_eq!(sql, r#"SELECT "users"."id", "users"."name" FROM "users""#);
    }

    #[test]
    fn test_select_mixed_arguments() {
        let model = users();
        let count: SimpleExpr =
            Func::count(Expr::col(model.field("id").unwrap().column_ref())).into();
        let sql = model
            .select(vec![SelectArg::from("name"), SelectArg::from(count)])
            .unwrap()
            .to_string(PostgresQueryBuilder);
        assert_eq!(
            sql,
            r#"SELECT "users"."name", COUNT("users"."id") FROM "users""#
        );
    }

    #[test]
    fn test_select_unknown_name_fails() {
        let err = users().select(["id", "nope"]).unwrap_err();
        assert!(matches!(
            err,
            quill_common::ModelError::UnknownColumn { .. }
        ));
    }

    #[test]
    fn test_insert_binds_table_and_columns() {
        let model = users();
        let mut stmt = model.insert([
            model.field("id").unwrap(),
            model.field("name").unwrap(),
        ]);
        stmt.values_panic([7.into(), "ada".into()]);
        assert_eq!(
            stmt.to_string(PostgresQueryBuilder),
            r#"INSERT INTO "users" ("id", "name") VALUES (7, 'ada')"#
        );
    }

    #[test]
    fn test_update_binds_table() {
        let model = users();
        let mut stmt = model.update();
        stmt.value(model.field("name").unwrap().column_iden(), "ada");
        assert_eq!(
            stmt.to_string(PostgresQueryBuilder),
            r#"UPDATE "users" SET "name" = 'ada'"#
        );
    }

    #[test]
    fn test_delete_requires_a_condition() {
        let model = users();
        let id = model.field("id").unwrap().column_ref();
        let stmt = model.delete(Expr::col(id).eq(1), []);
        assert_eq!(
            stmt.to_string(PostgresQueryBuilder),
            r#"DELETE FROM "users" WHERE "users"."id" = 1"#
        );
    }

    #[test]
    fn test_delete_ands_further_conditions() {
        let model = users();
        let id = model.field("id").unwrap().column_ref();
        let name = model.field("name").unwrap().column_ref();
        let stmt = model.delete(Expr::col(id).eq(1), [Expr::col(name).eq("ada")]);
        assert_eq!(
            stmt.to_string(PostgresQueryBuilder),
            r#"DELETE FROM "users" WHERE "users"."id" = 1 AND "users"."name" = 'ada'"#
        );
    }
}
