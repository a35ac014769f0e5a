//! Repository Integration Tests
//!
//! Tests for the ordered repositories with an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{Admin, ClientLogo, DomainError, Permissions, PortfolioItem};
    use crate::repository::{
        init_db, AdminRepository, ClientRepository, OrderedRepository, PortfolioRepository, Repository,
    };
    use reorder_core::OrderWrite;
    use std::path::PathBuf;

    async fn setup_portfolio() -> PortfolioRepository {
        let conn = init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB");
        PortfolioRepository::new(conn)
    }

    async fn setup_clients() -> ClientRepository {
        let conn = init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB");
        ClientRepository::new(conn)
    }

    fn titles(items: &[PortfolioItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn names(logos: &[ClientLogo]) -> Vec<&str> {
        logos.iter().map(|l| l.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_first_item_starts_at_zero() {
        let repo = setup_portfolio().await;

        let created = repo.create(&PortfolioItem::new("First".to_string())).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.order, 0);
    }

    #[tokio::test]
    async fn test_new_portfolio_items_are_prepended() {
        let repo = setup_portfolio().await;

        repo.create(&PortfolioItem::new("Old".to_string())).await.unwrap();
        let newer = repo.create(&PortfolioItem::new("New".to_string())).await.unwrap();

        assert_eq!(newer.order, -1);
        assert_eq!(titles(&repo.list().await.unwrap()), vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn test_new_client_logos_are_appended() {
        let repo = setup_clients().await;

        repo.create(&ClientLogo::new("Acme".to_string())).await.unwrap();
        let second = repo.create(&ClientLogo::new("Globex".to_string())).await.unwrap();

        assert_eq!(second.order, 1);
        assert_eq!(names(&repo.list().await.unwrap()), vec!["Acme", "Globex"]);
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let repo = setup_portfolio().await;

        let result = repo.create(&PortfolioItem::new(" ".to_string())).await;

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_order_batch_reorders() {
        let repo = setup_clients().await;
        let a = repo.create(&ClientLogo::new("A".to_string())).await.unwrap();
        let b = repo.create(&ClientLogo::new("B".to_string())).await.unwrap();
        let c = repo.create(&ClientLogo::new("C".to_string())).await.unwrap();

        // Move C to the top
        let written = repo
            .apply_order_batch(&[
                OrderWrite { id: c.id, order: 0 },
                OrderWrite { id: a.id, order: 1 },
                OrderWrite { id: b.id, order: 2 },
            ])
            .await
            .unwrap();

        assert_eq!(written, 3);
        assert_eq!(names(&repo.list().await.unwrap()), vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_unknown_id_aborts_whole_batch() {
        let repo = setup_clients().await;
        let a = repo.create(&ClientLogo::new("A".to_string())).await.unwrap();
        let b = repo.create(&ClientLogo::new("B".to_string())).await.unwrap();

        let result = repo
            .apply_order_batch(&[
                OrderWrite { id: b.id, order: 0 },
                OrderWrite { id: a.id, order: 1 },
                OrderWrite { id: 999, order: 2 },
            ])
            .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        let logos = repo.list().await.unwrap();
        assert_eq!(names(&logos), vec!["A", "B"]);
        assert_eq!(logos[0].order, 0);
        assert_eq!(logos[1].order, 1);
    }

    #[tokio::test]
    async fn test_empty_batch_writes_nothing() {
        let repo = setup_portfolio().await;
        assert_eq!(repo.apply_order_batch(&[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ties_fall_back_to_id() {
        let repo = setup_clients().await;
        let a = repo.create(&ClientLogo::new("A".to_string())).await.unwrap();
        let b = repo.create(&ClientLogo::new("B".to_string())).await.unwrap();

        repo.apply_order_batch(&[OrderWrite { id: a.id, order: 5 }, OrderWrite { id: b.id, order: 5 }])
            .await
            .unwrap();

        assert_eq!(names(&repo.list().await.unwrap()), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_update_keeps_order() {
        let repo = setup_portfolio().await;
        let old = repo.create(&PortfolioItem::new("Old".to_string())).await.unwrap();
        repo.create(&PortfolioItem::new("New".to_string())).await.unwrap();

        let mut edited = old.clone();
        edited.title = "Renamed".to_string();
        edited.order = -50;
        let updated = repo.update(&edited).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.order, old.order);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = setup_portfolio().await;
        let mut ghost = PortfolioItem::new("Ghost".to_string());
        ghost.id = 42;

        assert!(matches!(repo.update(&ghost).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_leaves_gap() {
        let repo = setup_clients().await;
        let a = repo.create(&ClientLogo::new("A".to_string())).await.unwrap();
        let b = repo.create(&ClientLogo::new("B".to_string())).await.unwrap();
        repo.create(&ClientLogo::new("C".to_string())).await.unwrap();

        repo.delete(b.id).await.unwrap();

        let orders: Vec<i32> = repo.list().await.unwrap().iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![0, 2]);
        assert!(repo.find_by_id(b.id).await.unwrap().is_none());
        assert!(repo.find_by_id(a.id).await.unwrap().is_some());
        assert!(matches!(repo.delete(b.id).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_visible_filters_hidden() {
        let repo = setup_portfolio().await;
        let mut hidden = PortfolioItem::new("Draft".to_string());
        hidden.is_visible = false;
        repo.create(&hidden).await.unwrap();
        repo.create(&PortfolioItem::new("Live".to_string())).await.unwrap();

        assert_eq!(titles(&repo.list_visible().await.unwrap()), vec!["Live"]);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_owner_upsert_and_token_lookup() {
        let conn = init_db(&PathBuf::from(":memory:")).await.unwrap();
        let repo = AdminRepository::new(conn);

        repo.upsert_owner("owner@studio.test", "first").await.unwrap();
        let owner = repo.upsert_owner("owner@studio.test", "second").await.unwrap();

        assert_eq!(owner.permissions, Permissions::all());
        assert!(repo.find_by_token("first").await.unwrap().is_none());
        assert_eq!(repo.find_by_token("second").await.unwrap().map(|a| a.id), Some(owner.id));
        assert!(repo.find_by_token("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_admin_is_conflict() {
        let conn = init_db(&PathBuf::from(":memory:")).await.unwrap();
        let repo = AdminRepository::new(conn);
        let editor = Admin::new("ed@studio.test".to_string(), "t1".to_string(), Permissions::default());

        repo.create(&editor).await.unwrap();
        let again = Admin::new("ed@studio.test".to_string(), "t2".to_string(), Permissions::default());

        assert!(matches!(repo.create(&again).await, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_db_file_is_created_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("folio.db");

        let conn = init_db(&path).await.unwrap();
        let repo = PortfolioRepository::new(conn);
        repo.create(&PortfolioItem::new("Persisted".to_string())).await.unwrap();

        assert!(path.exists());
    }
}
