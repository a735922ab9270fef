//! In-memory port implementations shared by tariff handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FileId, TariffId};
use crate::domain::tariff::{Tariff, TariffFile};
use crate::ports::{
    FileStorage, SaveResult, StorageError, TariffFileRepository, TariffRepository,
};

pub struct MockTariffRepository {
    tariffs: Mutex<Vec<Tariff>>,
}

impl MockTariffRepository {
    pub fn empty() -> Self {
        Self {
            tariffs: Mutex::new(Vec::new()),
        }
    }

    pub fn with(tariff: Tariff) -> Self {
        Self {
            tariffs: Mutex::new(vec![tariff]),
        }
    }

    pub fn stored(&self) -> Vec<Tariff> {
        self.tariffs.lock().unwrap().clone()
    }
}

#[async_trait]
impl TariffRepository for MockTariffRepository {
    async fn insert(&self, tariff: &Tariff) -> Result<SaveResult, DomainError> {
        let mut tariffs = self.tariffs.lock().unwrap();
        if tariffs.iter().any(|t| t.name == tariff.name) {
            return Ok(SaveResult::AlreadyExists);
        }
        tariffs.push(tariff.clone());
        Ok(SaveResult::Inserted)
    }

    async fn find_by_id(&self, id: &TariffId) -> Result<Option<Tariff>, DomainError> {
        Ok(self
            .tariffs
            .lock()
            .unwrap()
            .iter()
            .find(|t| &t.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tariff>, DomainError> {
        Ok(self
            .tariffs
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Tariff>, DomainError> {
        let mut tariffs = self.tariffs.lock().unwrap().clone();
        tariffs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tariffs)
    }

    async fn list_with_calories(&self) -> Result<Vec<Tariff>, DomainError> {
        Ok(self
            .tariffs
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.calories.is_some())
            .cloned()
            .collect())
    }

    async fn update(&self, tariff: &Tariff) -> Result<(), DomainError> {
        let mut tariffs = self.tariffs.lock().unwrap();
        if let Some(t) = tariffs.iter_mut().find(|t| t.id == tariff.id) {
            *t = tariff.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &TariffId) -> Result<(), DomainError> {
        self.tariffs.lock().unwrap().retain(|t| &t.id != id);
        Ok(())
    }
}

pub struct MockTariffFileRepository {
    files: Mutex<Vec<TariffFile>>,
}

impl MockTariffFileRepository {
    pub fn empty() -> Self {
        Self {
            files: Mutex::new(Vec::new()),
        }
    }

    pub fn with(files: Vec<TariffFile>) -> Self {
        Self {
            files: Mutex::new(files),
        }
    }

    pub fn stored(&self) -> Vec<TariffFile> {
        self.files.lock().unwrap().clone()
    }
}

#[async_trait]
impl TariffFileRepository for MockTariffFileRepository {
    async fn insert(&self, file: &TariffFile) -> Result<(), DomainError> {
        self.files.lock().unwrap().push(file.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &FileId) -> Result<Option<TariffFile>, DomainError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .find(|f| &f.id == id)
            .cloned())
    }

    async fn list_by_tariff(&self, tariff_id: &TariffId) -> Result<Vec<TariffFile>, DomainError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| &f.tariff_id == tariff_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &FileId) -> Result<(), DomainError> {
        self.files.lock().unwrap().retain(|f| &f.id != id);
        Ok(())
    }
}

pub struct MockStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockStorage {
    pub fn empty() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }

    pub fn with(path: &str, content: Vec<u8>) -> Self {
        let mut files = HashMap::new();
        files.insert(path.to_string(), content);
        Self {
            files: Mutex::new(files),
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl FileStorage for MockStorage {
    async fn write(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_vec());
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::new(path, "no such file"))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }
}
