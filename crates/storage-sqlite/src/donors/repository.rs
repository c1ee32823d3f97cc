use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use fundra_core::donors::{Donor, DonorRepositoryTrait};
use fundra_core::errors::Result;

use super::model::DonorDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::donors;

pub struct DonorRepository {
    pool: Arc<DbPool>,
}

impl DonorRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DonorRepository { pool }
    }

    /// Inserts a donor, generating an id when absent. Platform write path
    /// and tests only.
    pub fn insert(&self, donor: &Donor) -> Result<Donor> {
        let mut conn = get_connection(&self.pool)?;
        let mut row = DonorDB::from(donor);
        if row.id.is_empty() {
            row.id = Uuid::new_v4().to_string();
        }
        diesel::insert_into(donors::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Donor::from(row))
    }
}

#[async_trait]
impl DonorRepositoryTrait for DonorRepository {
    async fn get_by_id(&self, donor_id: &str) -> Result<Donor> {
        let mut conn = get_connection(&self.pool)?;
        let row = donors::table
            .find(donor_id)
            .first::<DonorDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Donor::from(row))
    }

    async fn get_by_ids(&self, donor_ids: &[String]) -> Result<HashMap<String, Donor>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = donors::table
            .filter(donors::id.eq_any(donor_ids))
            .load::<DonorDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let donor = Donor::from(row);
                (donor.id.clone(), donor)
            })
            .collect())
    }
}
