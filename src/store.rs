use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    forms::MovieInput,
};

/// Persistence handle for movie records.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn insert(&self, input: &MovieInput) -> AppResult<i32> {
        let res = movie::Entity::insert(active_model(input)).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    /// Newest first; movies from the same year are ordered by title.
    pub async fn fetch_all(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by_desc(movie::Column::ReleaseYear)
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn fetch_by_id(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Overwrites every field in a single statement; `id` is kept.
    pub async fn update(&self, id: i32, input: &MovieInput) -> AppResult<movie::Model> {
        let res = movie::Entity::update_many()
            .set(active_model(input))
            .filter(movie::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }

        Ok(movie::Model {
            id,
            title: input.title.clone(),
            actor1_name: input.actor1_name.clone(),
            actor2_name: input.actor2_name.clone(),
            director_name: input.director_name.clone(),
            genre: input.genre.clone(),
            release_year: input.release_year,
        })
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}

fn active_model(input: &MovieInput) -> movie::ActiveModel {
    movie::ActiveModel {
        id: NotSet,
        title: Set(input.title.clone()),
        actor1_name: Set(input.actor1_name.clone()),
        actor2_name: Set(input.actor2_name.clone()),
        director_name: Set(input.director_name.clone()),
        genre: Set(input.genre.clone()),
        release_year: Set(input.release_year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> MovieStore {
        let db = crate::db::connect_and_migrate("sqlite::memory:", 1).await.unwrap();
        MovieStore::new(db)
    }

    fn input(title: &str, release_year: i32) -> MovieInput {
        MovieInput {
            title: title.to_string(),
            actor1_name: "A".to_string(),
            actor2_name: "B".to_string(),
            director_name: "Villeneuve".to_string(),
            genre: "SciFi".to_string(),
            release_year,
        }
    }

    #[tokio::test]
    async fn insert_then_fetch_returns_input() {
        let store = store().await;
        let dune = input("Dune", 2021);

        let id = store.insert(&dune).await.unwrap();
        let stored = store.fetch_by_id(id).await.unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.title, dune.title);
        assert_eq!(stored.actor1_name, dune.actor1_name);
        assert_eq!(stored.actor2_name, dune.actor2_name);
        assert_eq!(stored.director_name, dune.director_name);
        assert_eq!(stored.genre, dune.genre);
        assert_eq!(stored.release_year, dune.release_year);
    }

    #[tokio::test]
    async fn fetch_all_orders_by_year_then_title() {
        let store = store().await;
        for (title, year) in [
            ("Arrival", 2016),
            ("Sicario", 2015),
            ("Dune", 2021),
            ("Blade Runner 2049", 2017),
            ("Prisoners", 2013),
            ("Enemy", 2013),
        ] {
            store.insert(&input(title, year)).await.unwrap();
        }

        let titles: Vec<_> =
            store.fetch_all().await.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(
            titles,
            ["Dune", "Blade Runner 2049", "Arrival", "Sicario", "Enemy", "Prisoners"]
        );
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let store = store().await;
        let id = store.insert(&input("Dune", 2021)).await.unwrap();

        let replacement = MovieInput {
            title: "Dune Part Two".to_string(),
            actor1_name: "Chalamet".to_string(),
            actor2_name: "Zendaya".to_string(),
            director_name: "D. Villeneuve".to_string(),
            genre: "Science Fiction".to_string(),
            release_year: 2024,
        };
        let updated = store.update(id, &replacement).await.unwrap();
        assert_eq!(updated.id, id);

        let stored = store.fetch_by_id(id).await.unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.title, "Dune Part Two");
        assert_eq!(stored.genre, "Science Fiction");
        assert_eq!(stored.release_year, 2024);
    }

    #[tokio::test]
    async fn update_leaves_other_rows_alone() {
        let store = store().await;
        let dune = store.insert(&input("Dune", 2021)).await.unwrap();
        let arrival = store.insert(&input("Arrival", 2016)).await.unwrap();
        let before = store.fetch_by_id(arrival).await.unwrap();

        store.update(dune, &input("Dune Part Two", 2024)).await.unwrap();

        assert_eq!(store.fetch_by_id(arrival).await.unwrap(), before);
        assert_eq!(store.fetch_by_id(dune).await.unwrap().title, "Dune Part Two");
    }

    #[tokio::test]
    async fn update_with_same_values_succeeds() {
        let store = store().await;
        let dune = input("Dune", 2021);
        let id = store.insert(&dune).await.unwrap();

        let updated = store.update(id, &dune).await.unwrap();
        assert_eq!(updated.title, "Dune");
    }

    #[tokio::test]
    async fn delete_then_fetch_is_not_found() {
        let store = store().await;
        let id = store.insert(&input("Dune", 2021)).await.unwrap();

        store.delete(id).await.unwrap();

        assert!(matches!(store.fetch_by_id(id).await, Err(AppError::NotFound(i)) if i == id));
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = store().await;
        store.insert(&input("Dune", 2021)).await.unwrap();

        assert!(matches!(store.fetch_by_id(999).await, Err(AppError::NotFound(999))));
        assert!(matches!(
            store.update(999, &input("Arrival", 2016)).await,
            Err(AppError::NotFound(999))
        ));
        assert!(matches!(store.delete(999).await, Err(AppError::NotFound(999))));
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = store().await;
        let first = store.insert(&input("Dune", 2021)).await.unwrap();
        store.delete(first).await.unwrap();

        let second = store.insert(&input("Arrival", 2016)).await.unwrap();
        assert!(second > first);
    }
}
