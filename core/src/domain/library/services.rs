use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::{
    account::ports::UserAccountRepository,
    authentication::ports::IdentityProvider,
    badge::ports::BadgeRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    library::{
        entities::{GeneratedLibraryRecipe, LibraryRecipe, Paginated},
        ports::{LibraryRecipeRepository, LibraryService},
        seed::sample_recipes,
        value_objects::{GetLibraryFilter, LibraryPage, SearchRecipesInput},
    },
    photo::ports::ObjectStoragePort,
    suggestion::{
        extractor::extract_records, ports::CompletionClient, prompts::search_request,
    },
    user_recipe::ports::UserRecipeRepository,
};

impl<L, UR, A, B, C, I, O, HC> LibraryService for Service<L, UR, A, B, C, I, O, HC>
where
    L: LibraryRecipeRepository,
    UR: UserRecipeRepository,
    A: UserAccountRepository,
    B: BadgeRepository,
    C: CompletionClient,
    I: IdentityProvider,
    O: ObjectStoragePort,
    HC: HealthCheckRepository,
{
    async fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> Result<Vec<LibraryRecipe>, CoreError> {
        let request = search_request(&input.query)?;
        let reply = self.completion_client.complete(request).await?;

        let now = Utc::now();
        let recipes: Vec<LibraryRecipe> =
            extract_records::<GeneratedLibraryRecipe>(Some(&reply))
                .into_iter()
                .filter_map(|draft| match draft.stamp(now) {
                    Ok(recipe) => Some(recipe),
                    Err(e) => {
                        warn!(error = %e, "dropping incomplete search result");
                        None
                    }
                })
                .collect();

        info!(
            query = %input.query,
            page = input.page.unwrap_or(1),
            count = recipes.len(),
            "library search completed"
        );

        if !recipes.is_empty()
            && let Err(e) = self.library_repository.insert_many(recipes.clone()).await
        {
            error!(error = %e, "failed to append search results to the library");
        }

        Ok(recipes
            .into_iter()
            .map(LibraryRecipe::with_resolved_photo)
            .collect())
    }

    async fn list_library(
        &self,
        filter: GetLibraryFilter,
    ) -> Result<Paginated<LibraryRecipe>, CoreError> {
        if self
            .library_repository
            .seed_if_empty(sample_recipes(Utc::now())?)
            .await?
        {
            info!("library was empty, seeded sample recipes");
        }

        let page = LibraryPage::from(filter);
        let total = self.library_repository.count(page.search.clone()).await?;
        let items = self
            .library_repository
            .list(page.clone())
            .await?
            .into_iter()
            .map(LibraryRecipe::with_resolved_photo)
            .collect();

        Ok(Paginated {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::domain::common::services::test_support::Mocks;

    const SEARCH_REPLY: &str = r#"[
      {"titulo": "Lasanha", "ingredientes": "massa, molho", "modo_preparo": "Monte e asse", "fonte": "Panelinha"},
      {"titulo": "Sem preparo", "ingredientes": "nada", "modo_preparo": ""},
      {"titulo": "Pizza", "ingredientes": ["farinha", "queijo"], "modo_preparo": "Asse", "foto_url": "https://images.unsplash.com/photo-1?w=400"}
    ]"#;

    fn search(query: &str) -> SearchRecipesInput {
        SearchRecipesInput {
            query: query.to_string(),
            page: None,
        }
    }

    #[tokio::test]
    async fn search_results_are_stamped_and_appended() {
        let mut mocks = Mocks::new();
        mocks
            .completion
            .expect_complete()
            .withf(|request| request.prompt.contains("\"massas\"") && request.max_tokens == 3000)
            .returning(|_| Box::pin(async move { Ok(SEARCH_REPLY.to_string()) }));
        mocks
            .library
            .expect_insert_many()
            .withf(|recipes| recipes.len() == 2 && recipes[0].photo_url.is_none())
            .times(1)
            .returning(|_| Box::pin(async move { Ok(()) }));

        let recipes = mocks.into_service().search_recipes(search("massas")).await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_ne!(recipes[0].id, recipes[1].id);
        assert_eq!(recipes[0].source.as_deref(), Some("Panelinha"));
        assert!(recipes[0].photo_url.as_deref().unwrap().contains("images.unsplash.com"));
        assert_eq!(recipes[1].ingredients, "farinha, queijo");
        assert_eq!(
            recipes[1].photo_url.as_deref(),
            Some("https://images.unsplash.com/photo-1?w=400")
        );
    }

    #[tokio::test]
    async fn append_failure_still_returns_results() {
        let mut mocks = Mocks::new();
        mocks
            .completion
            .expect_complete()
            .returning(|_| Box::pin(async move { Ok(SEARCH_REPLY.to_string()) }));
        mocks.library.expect_insert_many().returning(|_| {
            Box::pin(async move { Err(CoreError::StorageError("down".to_string())) })
        });

        let recipes = mocks.into_service().search_recipes(search("massas")).await.unwrap();
        assert_eq!(recipes.len(), 2);
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let mut mocks = Mocks::new();
        mocks.completion.expect_complete().never();

        let result = mocks.into_service().search_recipes(search(" ")).await;
        assert!(matches!(result, Err(CoreError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn empty_library_is_seeded_before_listing() {
        let mut mocks = Mocks::new();
        mocks
            .library
            .expect_seed_if_empty()
            .withf(|recipes| recipes.len() == 6)
            .times(1)
            .returning(|_| Box::pin(async move { Ok(true) }));
        mocks.library.expect_insert_many().never();
        mocks
            .library
            .expect_count()
            .times(1)
            .returning(|_| Box::pin(async move { Ok(6) }));
        mocks
            .library
            .expect_list()
            .withf(|page| page.page == 1 && page.per_page == 9)
            .returning(|_| {
                Box::pin(async move { sample_recipes(Utc::now()) })
            });

        let page = mocks
            .into_service()
            .list_library(GetLibraryFilter::default())
            .await
            .unwrap();

        assert_eq!(page.total, 6);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.per_page, 9);
    }

    #[tokio::test]
    async fn concurrent_first_listings_seed_once() {
        let mut mocks = Mocks::new();
        let library = Arc::new(std::sync::Mutex::new(Vec::<LibraryRecipe>::new()));
        let seeds = Arc::new(AtomicUsize::new(0));

        let store = library.clone();
        let inserted = seeds.clone();
        mocks.library.expect_seed_if_empty().returning(move |recipes| {
            let mut rows = store.lock().unwrap();
            let seeded = rows.is_empty();
            if seeded {
                rows.extend(recipes);
                inserted.fetch_add(1, Ordering::SeqCst);
            }
            Box::pin(async move { Ok(seeded) })
        });
        let store = library.clone();
        mocks.library.expect_count().returning(move |_| {
            let total = store.lock().unwrap().len() as u64;
            Box::pin(async move { Ok(total) })
        });
        let store = library.clone();
        mocks.library.expect_list().returning(move |_| {
            let rows = store.lock().unwrap().clone();
            Box::pin(async move { Ok(rows) })
        });

        let service = mocks.into_service();
        let (first, second) = tokio::join!(
            service.list_library(GetLibraryFilter::default()),
            service.list_library(GetLibraryFilter::default())
        );

        assert_eq!(seeds.load(Ordering::SeqCst), 1);
        assert_eq!(first.unwrap().total, 6);
        assert_eq!(second.unwrap().total, 6);
    }

    #[tokio::test]
    async fn listing_resolves_missing_photos() {
        let mut mocks = Mocks::new();
        mocks
            .library
            .expect_count()
            .returning(|_| Box::pin(async move { Ok(1) }));
        mocks
            .library
            .expect_seed_if_empty()
            .returning(|_| Box::pin(async move { Ok(false) }));
        mocks.library.expect_insert_many().never();
        mocks
            .library
            .expect_list()
            .withf(|page| page.search.as_deref() == Some("torta") && page.page == 2)
            .returning(|_| {
                Box::pin(async move {
                    Ok(vec![LibraryRecipe::new(
                        "Torta de limão",
                        "limão",
                        "asse",
                        None,
                        None,
                        Utc::now(),
                    )?])
                })
            });

        let page = mocks
            .into_service()
            .list_library(GetLibraryFilter {
                search: Some("torta".into()),
                page: Some(2),
                per_page: None,
            })
            .await
            .unwrap();

        assert!(page.items[0]
            .photo_url
            .as_deref()
            .unwrap()
            .contains("photo-1464349095431-e9a21285b5f3"));
    }
}
