use dnscheck_application::ports::HistoryRepository;
use dnscheck_domain::{DomainResultSet, RecordValue, ServerRecords, ServerResponse, TimeNode};
use dnscheck_infrastructure::repositories::SqliteHistoryRepository;

mod helpers;
use helpers::create_test_db;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn node(id: &str) -> TimeNode {
    TimeNode {
        id: id.to_string(),
        date: "2026-10-19".to_string(),
        time: "12:00:00".to_string(),
        timestamp: "2026-10-19 12:00:00".to_string(),
        results: DomainResultSet::new(),
    }
}

fn node_with_results(id: &str) -> TimeNode {
    let mut by_server = ServerResponse::new();
    by_server.insert(
        "8.8.8.8 # Google".to_string(),
        ServerRecords::new(
            RecordValue::Many(strings(&["93.184.216.34"])),
            "No CNAME record (NoAnswer)",
        ),
    );
    let mut results = DomainResultSet::new();
    results.insert("example.com".to_string(), by_server);

    TimeNode {
        results,
        ..node(id)
    }
}

async fn repo() -> SqliteHistoryRepository {
    SqliteHistoryRepository::new(create_test_db().await)
}

#[tokio::test]
async fn test_first_query_creates_record() {
    let repo = repo().await;

    repo.record(
        &strings(&["example.com"]),
        &strings(&["8.8.8.8 # Google"]),
        node_with_results("20261019120000001"),
        30,
    )
    .await
    .unwrap();

    let history = repo.list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].domains, vec!["example.com"]);
    assert_eq!(history[0].dns_servers, vec!["8.8.8.8 # Google"]);
    assert!(history[0].is_flat());

    let stored = &history[0].nodes[0];
    assert_eq!(stored.id, "20261019120000001");
    assert_eq!(stored.results, node_with_results("x").results);
}

#[tokio::test]
async fn test_same_domains_merge_newest_first() {
    let repo = repo().await;

    repo.record(&strings(&["b.com", "a.com"]), &strings(&["8.8.8.8"]), node("1"), 30)
        .await
        .unwrap();
    repo.record(&strings(&["c.com"]), &[], node("2"), 30)
        .await
        .unwrap();
    repo.record(&strings(&["a.com", "b.com"]), &strings(&["1.1.1.1"]), node("3"), 30)
        .await
        .unwrap();

    let history = repo.list().await.unwrap();
    assert_eq!(history.len(), 2);

    let merged = &history[0];
    assert_eq!(merged.domains, vec!["b.com", "a.com"]);
    assert_eq!(merged.dns_servers, vec!["1.1.1.1"]);
    let ids: Vec<&str> = merged.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);

    assert_eq!(history[1].domains, vec!["c.com"]);
}

#[tokio::test]
async fn test_prunes_least_recently_used() {
    let repo = repo().await;

    for (i, domain) in ["a.com", "b.com", "c.com"].into_iter().enumerate() {
        repo.record(&strings(&[domain]), &[], node(&i.to_string()), 30)
            .await
            .unwrap();
    }
    // Touch a.com so b.com becomes the oldest.
    repo.record(&strings(&["a.com"]), &[], node("3"), 2)
        .await
        .unwrap();

    let history = repo.list().await.unwrap();
    let domains: Vec<&str> = history.iter().map(|r| r.domains[0].as_str()).collect();
    assert_eq!(domains, vec!["a.com", "c.com"]);
}

#[tokio::test]
async fn test_delete_by_any_node_id() {
    let repo = repo().await;

    repo.record(&strings(&["a.com"]), &[], node("10"), 30).await.unwrap();
    repo.record(&strings(&["a.com"]), &[], node("11"), 30).await.unwrap();
    repo.record(&strings(&["b.com"]), &[], node("12"), 30).await.unwrap();

    assert!(repo.delete("10").await.unwrap());
    assert!(!repo.delete("10").await.unwrap());

    let history = repo.list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].domains, vec!["b.com"]);
}

#[tokio::test]
async fn test_clear() {
    let repo = repo().await;

    repo.record(&strings(&["a.com"]), &[], node("1"), 30).await.unwrap();
    repo.record(&strings(&["b.com"]), &[], node("2"), 30).await.unwrap();

    assert_eq!(repo.clear().await.unwrap(), 2);
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreadable_results_degrade_to_empty() {
    let pool = create_test_db().await;
    let repo = SqliteHistoryRepository::new(pool.clone());

    repo.record(&strings(&["a.com"]), &[], node("1"), 30).await.unwrap();
    sqlx::query("UPDATE history_nodes SET results = 'not json'")
        .execute(&pool)
        .await
        .unwrap();

    let history = repo.list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].nodes[0].results.is_empty());
}

#[tokio::test]
async fn test_same_millisecond_ids_stay_distinct() {
    let repo = repo().await;

    repo.record(&strings(&["a.com"]), &[], node("20261019120000000"), 30)
        .await
        .unwrap();
    repo.record(&strings(&["b.com"]), &[], node("20261019120000000"), 30)
        .await
        .unwrap();

    let history = repo.list().await.unwrap();
    let b = &history[0];
    assert_eq!(b.domains, vec!["b.com"]);
    assert_eq!(b.nodes[0].id, "20261019120000000-1");

    assert!(repo.delete("20261019120000000").await.unwrap());

    let history = repo.list().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].domains, vec!["b.com"]);
}
