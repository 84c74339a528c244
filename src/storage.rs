use crate::errors::AppError;
use crate::models::{Exercise, Workout};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::error;

/// A record persisted in one of the JSON collection files.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const FILE: &'static str;
    const KIND: &'static str;

    fn id(&self) -> u64;
    fn assign_id(&mut self, id: u64);
}

impl Record for Exercise {
    const FILE: &'static str = "exercises.json";
    const KIND: &'static str = "Exercise";

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}

impl Record for Workout {
    const FILE: &'static str = "workouts.json";
    const KIND: &'static str = "Workout";

    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Flat-file store over `<data_dir>/exercises.json` and
/// `<data_dir>/workouts.json`. Every mutation is a full read-modify-rewrite of
/// one collection, serialized within the process by a single lock. There is no
/// cross-process locking; concurrent external writers are last-write-wins.
#[derive(Clone)]
pub struct Store {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn resolve_data_dir() -> PathBuf {
        env::var("FITNESS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"))
    }

    /// Creates the data directory on first run, seeds the exercise catalog
    /// and writes an empty workout log. Existing files are left untouched.
    pub async fn init(&self) -> Result<(), std::io::Error> {
        fs::create_dir_all(&self.data_dir).await?;

        let exercises = self.data_dir.join(Exercise::FILE);
        if !fs::try_exists(&exercises).await? {
            write_file(&exercises, &default_exercises()).await?;
        }

        let workouts = self.data_dir.join(Workout::FILE);
        if !fs::try_exists(&workouts).await? {
            write_file::<Workout>(&workouts, &[]).await?;
        }

        Ok(())
    }

    pub async fn list<T: Record>(&self) -> Vec<T> {
        self.read_collection().await
    }

    /// Assigns `max(existing) + 1` (1 for an empty collection) and persists.
    pub async fn insert<T: Record>(&self, mut record: T) -> Result<T, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<T> = self.read_collection().await;
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        record.assign_id(next_id);
        records.push(record.clone());
        self.write_collection(&records).await?;
        Ok(record)
    }

    pub async fn find_by_id<T: Record>(&self, id: u64) -> Result<T, AppError> {
        self.read_collection::<T>()
            .await
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| AppError::not_found(format!("{} not found", T::KIND)))
    }

    /// Applies `apply` to the matching record and rewrites the collection.
    /// The merge semantics live with the record type, not the store.
    pub async fn update<T, F>(&self, id: u64, apply: F) -> Result<T, AppError>
    where
        T: Record,
        F: FnOnce(&mut T),
    {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<T> = self.read_collection().await;
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            return Err(AppError::not_found(format!("{} not found", T::KIND)));
        };
        apply(record);
        let updated = record.clone();
        self.write_collection(&records).await?;
        Ok(updated)
    }

    pub async fn remove<T: Record>(&self, id: u64) -> Result<T, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<T> = self.read_collection().await;
        let Some(index) = records.iter().position(|record| record.id() == id) else {
            return Err(AppError::not_found(format!("{} not found", T::KIND)));
        };
        let removed = records.remove(index);
        self.write_collection(&records).await?;
        Ok(removed)
    }

    async fn read_collection<T: Record>(&self) -> Vec<T> {
        let path = self.data_dir.join(T::FILE);
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(records) => records,
                Err(err) => {
                    error!("failed to parse {}: {err}", path.display());
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                error!("failed to read {}: {err}", path.display());
                Vec::new()
            }
        }
    }

    async fn write_collection<T: Record>(&self, records: &[T]) -> Result<(), AppError> {
        write_file(&self.data_dir.join(T::FILE), records).await?;
        Ok(())
    }
}

// Write to a sibling temp file and rename it into place so an in-process
// reader never sees a truncated collection.
async fn write_file<T: Serialize>(path: &Path, records: &[T]) -> Result<(), std::io::Error> {
    let payload = serde_json::to_vec_pretty(records).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await
}

fn default_exercises() -> Vec<Exercise> {
    let seed = [
        ("Push-ups", "chest", "bodyweight"),
        ("Squats", "legs", "bodyweight"),
        ("Pull-ups", "back", "pull-up bar"),
        ("Bench Press", "chest", "barbell"),
        ("Deadlift", "back", "barbell"),
        ("Shoulder Press", "shoulders", "dumbbells"),
        ("Bicep Curls", "arms", "dumbbells"),
        ("Tricep Dips", "arms", "bodyweight"),
        ("Lunges", "legs", "bodyweight"),
        ("Plank", "core", "bodyweight"),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(index, (name, category, equipment))| Exercise {
            id: index as u64 + 1,
            name: name.to_string(),
            category: category.to_string(),
            equipment: equipment.to_string(),
        })
        .collect()
}
