//! Compare-and-swap upsert of externally keyed rows.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, IdenStatic, IntoActiveModel, Iterable,
    ModelTrait, PrimaryKeyToColumn, QueryFilter,
};

use super::stats::MergeOutcome;

/// Inserts `model` when its primary key is unknown, otherwise rewrites the non-key columns if
/// the stored row differs. An existing row is always reported as `Updated`.
pub async fn upsert<E, A>(txn: &DatabaseTransaction, model: E::Model) -> Result<MergeOutcome, DbErr>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A> + PartialEq,
    A: ActiveModelTrait<Entity = E> + Send,
{
    let key_columns: Vec<E::Column> = E::PrimaryKey::iter().map(|pk| pk.into_column()).collect();

    let mut select = E::find();
    for column in key_columns.iter() {
        select = select.filter(column.eq(ModelTrait::get(&model, *column)));
    }

    match select.one(txn).await? {
        None => {
            E::insert(model.into_active_model())
                .exec_without_returning(txn)
                .await?;
            Ok(MergeOutcome::Inserted)
        }
        Some(stored) if stored == model => Ok(MergeOutcome::Updated),
        Some(_) => {
            let value_columns: Vec<E::Column> = E::Column::iter()
                .filter(|c| !key_columns.iter().any(|k| k.as_str() == c.as_str()))
                .collect();
            E::insert(model.into_active_model())
                .on_conflict(
                    OnConflict::columns(key_columns)
                        .update_columns(value_columns)
                        .to_owned(),
                )
                .exec_without_returning(txn)
                .await?;
            Ok(MergeOutcome::Updated)
        }
    }
}
