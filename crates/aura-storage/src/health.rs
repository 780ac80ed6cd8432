use aura_core::models::daily_log::DailyLog;
use aura_core::models::patient::PatientRecord;
use aura_core::models::profile::UserProfile;
use aura_core::storage_keys;
use tracing::info;

use crate::error::StorageError;
use crate::objects::KeyValueStore;
use crate::state::{load_item, save_item};

/// How many daily logs are kept; older entries are dropped on append.
pub const MAX_DAILY_LOGS: usize = 90;

/// Typed access to the user's health data.
pub struct HealthStore<S> {
    store: S,
}

impl<S: KeyValueStore> HealthStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Validate and save the profile, stamping `updated_at`.
    pub fn save_user_profile(&self, profile: &UserProfile) -> Result<UserProfile, StorageError> {
        profile.validate()?;
        let mut stamped = profile.clone();
        stamped.updated_at = Some(jiff::Timestamp::now());
        save_item(&self.store, storage_keys::PROFILE, &stamped)?;
        info!(role = %stamped.role, "profile saved");
        Ok(stamped)
    }

    pub fn get_user_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        load_item(&self.store, storage_keys::PROFILE)
    }

    /// Append a log entry and return the retained history, oldest first.
    pub fn save_daily_log(&self, entry: DailyLog) -> Result<Vec<DailyLog>, StorageError> {
        let mut logs = self.get_daily_logs()?;
        logs.push(entry);
        if logs.len() > MAX_DAILY_LOGS {
            let excess = logs.len() - MAX_DAILY_LOGS;
            logs.drain(..excess);
        }
        save_item(&self.store, storage_keys::DAILY_LOGS, &logs)?;
        Ok(logs)
    }

    pub fn get_daily_logs(&self) -> Result<Vec<DailyLog>, StorageError> {
        Ok(load_item(&self.store, storage_keys::DAILY_LOGS)?.unwrap_or_default())
    }

    pub fn add_patient_record(
        &self,
        record: PatientRecord,
    ) -> Result<Vec<PatientRecord>, StorageError> {
        let mut records = self.get_patient_records()?;
        records.push(record);
        save_item(&self.store, storage_keys::PATIENT_RECORDS, &records)?;
        Ok(records)
    }

    pub fn get_patient_records(&self) -> Result<Vec<PatientRecord>, StorageError> {
        Ok(load_item(&self.store, storage_keys::PATIENT_RECORDS)?.unwrap_or_default())
    }

    /// Wipe everything the app has stored.
    pub fn clear_all_data(&self) -> Result<(), StorageError> {
        self.store.remove(storage_keys::PROFILE)?;
        save_item(&self.store, storage_keys::DAILY_LOGS, &Vec::<DailyLog>::new())?;
        save_item(
            &self.store,
            storage_keys::PATIENT_RECORDS,
            &Vec::<PatientRecord>::new(),
        )?;
        info!("all user data cleared");
        Ok(())
    }
}
