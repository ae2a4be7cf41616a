mod utils;

use hilo::leaderboard::LeaderboardService;
use hilo::player::PlayerService;
use hilo::{Command, Guess, PlayerRepository, SqlitePlayerRepository};
use std::sync::Arc;
use utils::{scratch_dir, TestSetupBuilder};

#[tokio::test]
async fn sqlite_file_survives_reopen() {
    let dir = scratch_dir();
    let path = dir.path().join("hilo.db");

    {
        let repo = SqlitePlayerRepository::open(&path).await.unwrap();
        repo.save_player("Alice", 12_000).await.unwrap();
        repo.close().await;
    }

    let repo = SqlitePlayerRepository::open(&path).await.unwrap();
    let alice = repo.load_player("Alice").await.unwrap().unwrap();
    assert_eq!(alice.money, 12_000);

    repo.save_player("Alice", 12_500).await.unwrap();
    let players = repo.list_players_by_money().await.unwrap();
    assert_eq!(players.len(), 1, "save must overwrite, not insert a duplicate");
    assert_eq!(players[0].money, 12_500);
}

#[tokio::test]
async fn unknown_player_is_not_found_on_empty_store() {
    let dir = scratch_dir();
    let repo = SqlitePlayerRepository::open(&dir.path().join("hilo.db"))
        .await
        .unwrap();

    assert!(repo.load_player("Unknown").await.unwrap().is_none());
    assert!(repo.list_players_by_money().await.unwrap().is_empty());
}

#[tokio::test]
async fn leaderboard_from_sqlite_is_descending() {
    let repo: Arc<dyn PlayerRepository> =
        Arc::new(SqlitePlayerRepository::in_memory().await.unwrap());
    repo.save_player("Alice", 12_000).await.unwrap();
    repo.save_player("Bob", 9_500).await.unwrap();
    repo.save_player("Carol", 15_000).await.unwrap();

    let mut leaderboard = LeaderboardService::new(repo);
    let view = leaderboard.refresh().await.unwrap();

    assert_eq!(
        view.lines(),
        vec![
            "1. Carol - Money: $15000",
            "2. Alice - Money: $12000",
            "3. Bob - Money: $9500",
        ]
    );
}

#[tokio::test]
async fn player_service_against_sqlite() {
    let repo: Arc<dyn PlayerRepository> =
        Arc::new(SqlitePlayerRepository::in_memory().await.unwrap());
    let service = PlayerService::new(repo.clone());

    let first = service.enter("Alice").await.unwrap();
    assert_eq!(first.greeting(), "Welcome, Alice!");
    assert_eq!(first.money(), 10_000);

    service.record_balance("Alice", 9_000).await.unwrap();

    let second = service.enter("Alice").await.unwrap();
    assert_eq!(second.greeting(), "Welcome back, Alice!");
    assert_eq!(second.money(), 9_000);
    assert_eq!(repo.list_players_by_money().await.unwrap().len(), 1);
}

#[tokio::test]
async fn every_round_is_written_through_to_sqlite() {
    let mut setup = TestSetupBuilder::new().with_sqlite().build().await;

    setup
        .app
        .handle(Command::SubmitName("Alice".to_string()))
        .await
        .unwrap();
    setup.app.handle(Command::StartGame).await.unwrap();

    for _ in 0..5 {
        setup.app.handle(Command::Guess(Guess::Higher)).await.unwrap();
        let balance = setup.app.session().unwrap().balance();
        let stored = setup.repository.load_player("Alice").await.unwrap().unwrap();
        assert_eq!(stored.money, balance);
    }
}

#[tokio::test]
async fn scratch_database_is_removed_after_the_test() {
    let dir = scratch_dir();
    let path = dir.path().join("hilo.db");

    let repo = SqlitePlayerRepository::open(&path).await.unwrap();
    repo.save_player("Alice", 10_000).await.unwrap();
    repo.close().await;
    assert!(path.exists());

    drop(dir);
    assert!(!path.exists());
}
