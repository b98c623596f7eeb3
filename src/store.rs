use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use popote_shared::mealplan::MenuGroup;
use popote_shared::recipe::Recipe;
use popote_shared::{MenuScheduleStore, RecipeCatalog};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::StoreConfig;

/// Recipes and menus, one JSON array file each.
pub struct JsonStore {
    pub recipes: JsonFile<Recipe>,
    pub menus: JsonFile<MenuGroup>,
}

impl JsonStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            recipes: JsonFile::new(&config.recipes_path),
            menus: JsonFile::new(&config.menus_path),
        }
    }
}

trait Record {
    fn id(&self) -> &str;
}

impl Record for Recipe {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for MenuGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A JSON array of `T` on disk. A missing file reads as an empty array.
pub struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    records: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
            records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> JsonFile<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    async fn read(&self) -> popote_shared::Result<Vec<T>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(vec![]);
        }

        let value = serde_json::from_str::<Value>(&content)?;
        if !value.is_array() {
            popote_shared::bail!("{} must contain a JSON array", self.path.display());
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Writes a sibling temp file then renames it over the target.
    async fn write(&self, records: &[T]) -> popote_shared::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");

        tokio::fs::write(&tmp, serde_json::to_vec_pretty(records)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "store written");

        Ok(())
    }

    async fn upsert(&self, record: T) -> popote_shared::Result<T> {
        if record.id().trim().is_empty() {
            popote_shared::user!("cannot store a record without id");
        }

        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;

        let pos = match records.iter().position(|r| r.id() == record.id()) {
            Some(pos) => {
                records[pos] = record;
                pos
            }
            None => {
                records.push(record);
                records.len() - 1
            }
        };

        self.write(&records).await?;

        Ok(records.swap_remove(pos))
    }

    async fn remove(&self, id: &str) -> popote_shared::Result<bool> {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);

        if records.len() == before {
            return Ok(false);
        }

        self.write(&records).await?;

        Ok(true)
    }

    async fn replace(&self, records: Vec<T>) -> popote_shared::Result<usize> {
        let _guard = self.lock.lock().await;
        self.write(&records).await?;

        Ok(records.len())
    }
}

#[async_trait]
impl RecipeCatalog for JsonFile<Recipe> {
    async fn get_all(&self) -> popote_shared::Result<Vec<Recipe>> {
        self.read().await
    }

    async fn save(&self, recipe: Recipe) -> popote_shared::Result<Recipe> {
        self.upsert(recipe).await
    }

    async fn delete(&self, id: &str) -> popote_shared::Result<bool> {
        self.remove(id).await
    }

    async fn replace_all(&self, recipes: Vec<Recipe>) -> popote_shared::Result<usize> {
        self.replace(recipes).await
    }
}

#[async_trait]
impl MenuScheduleStore for JsonFile<MenuGroup> {
    async fn get_all(&self) -> popote_shared::Result<Vec<MenuGroup>> {
        self.read().await
    }

    async fn save(&self, group: MenuGroup) -> popote_shared::Result<MenuGroup> {
        self.upsert(group).await
    }

    async fn delete(&self, id: &str) -> popote_shared::Result<bool> {
        self.remove(id).await
    }
}
