use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use uuid::Uuid;

use byline_core::error::RepoError;
use byline_core::ports::{BaseRepository, StoredRecord};

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a failed insert or update onto the repository error taxonomy.
fn write_error(err: DbErr) -> RepoError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }

    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl<E, T> BaseRepository<T, Uuid> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    T: StoredRecord + From<E::Model> + Into<E::ActiveModel>,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let result = E::find()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let mut records: Vec<T> = result.into_iter().map(Into::into).collect();
        records.sort_by_key(|r| r.created_at());
        Ok(records)
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        let now = Utc::now();

        let model = match entity.id() {
            None => {
                let id = Uuid::new_v4();
                entity.mark_created(id, now);
                let active_model: E::ActiveModel = entity.into();
                let model = active_model.insert(&self.db).await.map_err(write_error)?;
                tracing::debug!(entity = T::ENTITY, %id, "Record inserted");
                model
            }
            Some(id) => {
                entity.mark_updated(now);
                let active_model: E::ActiveModel = entity.into();
                let model = active_model.update(&self.db).await.map_err(write_error)?;
                tracing::debug!(entity = T::ENTITY, %id, "Record updated");
                model
            }
        };

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(entity = T::ENTITY, %id, "Record deleted");
        Ok(())
    }
}
