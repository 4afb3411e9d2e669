use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::db::regexp_match;
use crate::domain::product::{NewProduct, Product};
use crate::domain::query::{FieldMatch, Predicate, QuerySpec, SortField, SortOrder, TextField};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};
use crate::schema::products;

type ProductCondition = Box<dyn BoxableExpression<products::table, Sqlite, SqlType = Bool>>;

fn field_condition(field_match: &FieldMatch) -> ProductCondition {
    let pattern = field_match.pattern.clone();
    match field_match.field {
        TextField::Title => Box::new(regexp_match(pattern, products::title)),
        TextField::Description => Box::new(regexp_match(pattern, products::description)),
    }
}

/// Products table restricted by `filter`.
fn filtered(filter: &Predicate) -> products::BoxedQuery<'static, Sqlite> {
    let query = products::table.into_boxed();
    match filter {
        Predicate::MatchAll => query,
        Predicate::Or(left, right) => {
            query.filter(field_condition(left).or(field_condition(right)))
        }
    }
}

impl ProductReader for DieselRepository {
    fn count_products(&self, filter: &Predicate) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = filtered(filter).count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }

    fn find_products(&self, spec: &QuerySpec) -> RepositoryResult<Vec<Product>> {
        let mut conn = self.conn()?;

        let mut items = filtered(&spec.filter);

        if let Some(sort) = spec.sort {
            items = match (sort.field, sort.order) {
                (SortField::Price, SortOrder::Asc) => items.order(products::price.asc()),
                (SortField::Price, SortOrder::Desc) => items.order(products::price.desc()),
            }
            // Equal keys keep insertion order so pages never overlap.
            .then_order_by(products::id.asc());
        }

        let products = items
            .offset(spec.skip.max(0))
            .limit(spec.limit)
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(products)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let mut conn = self.conn()?;

        let products = products::table
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(products)
    }
}

impl ProductWriter for DieselRepository {
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let insertables: Vec<DbNewProduct> = new_products.iter().map(Into::into).collect();
        let affected = diesel::insert_into(products::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
