//! End-to-end tests of the tree model running against a real
//! filesystem vault instead of a scripted provider.

use std::sync::Arc;

use notevault_core::traits::tree::TreeProvider;
use notevault_tree::{MutationCoordinator, NavigationController, TreeSynchronizer};
use notevault_vault::store::FsVault;

async fn seeded_vault() -> (tempfile::TempDir, Arc<FsVault>) {
    let dir = tempfile::tempdir().unwrap();
    let vault = FsVault::new(dir.path().to_str().unwrap()).await.unwrap();
    vault
        .write_file("/folder1/folder2/note.md", "# Note")
        .await
        .unwrap();
    vault.write_file("/folder1/other.md", "").await.unwrap();
    vault.write_file("/readme.md", "").await.unwrap();
    (dir, Arc::new(vault))
}

#[tokio::test]
async fn test_reveal_deep_link_against_filesystem() {
    let (_dir, vault) = seeded_vault().await;
    let sync = Arc::new(TreeSynchronizer::new(vault));
    sync.refresh_path("/").await.unwrap();

    let nav = NavigationController::new(Arc::clone(&sync));
    nav.reveal("/folder1/folder2/note.md").await.unwrap();

    assert!(sync.is_expanded("/folder1").await);
    assert!(sync.is_expanded("/folder1/folder2").await);
    assert_eq!(
        sync.selected().await,
        Some("/folder1/folder2/note.md".to_string())
    );

    let snapshot = sync.snapshot().await;
    let folder1 = snapshot.iter().find(|n| n.path == "/folder1").unwrap();
    let folder2 = folder1
        .children
        .as_ref()
        .unwrap()
        .iter()
        .find(|n| n.path == "/folder1/folder2")
        .unwrap();
    assert_eq!(
        folder2.children.as_ref().unwrap()[0].path,
        "/folder1/folder2/note.md"
    );
}

#[tokio::test]
async fn test_rename_and_move_round_trip_against_filesystem() {
    let (_dir, vault) = seeded_vault().await;
    let sync = Arc::new(TreeSynchronizer::new(Arc::clone(&vault) as Arc<dyn TreeProvider>));
    sync.refresh_path("/").await.unwrap();
    sync.ensure_loaded("/folder1").await.unwrap();

    let coordinator = MutationCoordinator::new(
        Arc::clone(&sync),
        Arc::clone(&vault) as Arc<dyn TreeProvider>,
    );

    let new_path = coordinator
        .rename("/folder1/other.md", "renamed")
        .await
        .unwrap();
    assert_eq!(new_path, "/folder1/renamed.md");
    assert!(vault.exists("/folder1/renamed.md").await.unwrap());

    coordinator
        .move_entry("/folder1/renamed.md", "/")
        .await
        .unwrap();
    assert!(vault.exists("/renamed.md").await.unwrap());

    let children = sync.children_of("/").await.unwrap();
    assert!(children.iter().any(|n| n.path == "/renamed.md"));
    let folder1 = sync.children_of("/folder1").await.unwrap();
    assert!(!folder1.iter().any(|n| n.path == "/folder1/renamed.md"));
}

#[tokio::test]
async fn test_expand_all_loads_every_level() {
    let (_dir, vault) = seeded_vault().await;
    let sync = Arc::new(TreeSynchronizer::new(vault));
    sync.refresh_path("/").await.unwrap();

    sync.expand_all().await.unwrap();

    assert!(sync.is_expanded("/folder1").await);
    assert!(sync.is_expanded("/folder1/folder2").await);
}

#[tokio::test]
async fn test_create_and_delete_through_coordinator() {
    let (_dir, vault) = seeded_vault().await;
    let sync = Arc::new(TreeSynchronizer::new(Arc::clone(&vault) as Arc<dyn TreeProvider>));
    sync.refresh_path("/").await.unwrap();
    sync.ensure_loaded("/folder1").await.unwrap();

    let coordinator = MutationCoordinator::new(
        Arc::clone(&sync),
        Arc::clone(&vault) as Arc<dyn TreeProvider>,
    );

    let path = coordinator.create_file("/folder1", "draft", "").await.unwrap();
    assert_eq!(path, "/folder1/draft.md");
    let children = sync.children_of("/folder1").await.unwrap();
    assert!(children.iter().any(|n| n.path == "/folder1/draft.md"));

    sync.select("/folder1/draft.md").await;
    let navigate_to = coordinator.delete("/folder1/draft.md").await.unwrap();
    assert_eq!(navigate_to, Some("/folder1".to_string()));
    assert!(!vault.exists("/folder1/draft.md").await.unwrap());
}
