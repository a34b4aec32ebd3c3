use reqwest::Client;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use weight_tracker::models::{
    DeleteResponse, GoalResponse, RecordPage, RecordResponse, StatsResponse, TodayResponse,
};
use weight_tracker::notice::NoticeTier;
use weight_tracker::stats::Milestone;
use weight_tracker::trend::Trend;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("weight_tracker_http_{tag}_{}_{}", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(data_dir: &Path) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_weight_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn record(client: &Client, server: &TestServer, body: serde_json::Value) -> RecordResponse {
    let response = client
        .post(format!("{}/api/records", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

async fn page(client: &Client, server: &TestServer, window: usize) -> RecordPage {
    client
        .get(format!("{}/api/records?window={window}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn stats(client: &Client, server: &TestServer) -> StatsResponse {
    client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_records_trends_and_stats() {
    let data_dir = unique_data_dir("stats");
    let server = spawn_server(&data_dir).await;
    let client = Client::new();

    let empty = stats(&client, &server).await;
    assert!(empty.stats.is_none());
    assert!(empty.notice.is_none());

    for (date, weight) in [
        ("2026-02-01", 70.0),
        ("2026-02-02", 68.0),
        ("2026-02-03", 68.0),
        ("2026-02-04", 65.0),
    ] {
        let body = record(
            &client,
            &server,
            serde_json::json!({ "date": date, "weight": weight, "meal": "toast" }),
        )
        .await;
        let notice = body.notice.expect("confirmation notice");
        assert_eq!(notice.tier, NoticeTier::Info);
    }

    let listing = page(&client, &server, 5).await;
    assert_eq!(listing.total, 4);
    assert!(!listing.has_more);
    let trends: Vec<_> = listing.items.iter().map(|item| item.trend).collect();
    assert_eq!(
        trends,
        vec![
            Some(Trend::Decrease),
            Some(Trend::NoChange),
            Some(Trend::Decrease),
            None,
        ]
    );
    assert_eq!(listing.items[0].date.to_string(), "2026-02-04");
    assert_eq!(listing.items[3].arrow, "");

    let body = stats(&client, &server).await;
    let summary = body.stats.expect("stats");
    assert_eq!(summary.total_loss, 5.0);
    assert_eq!(summary.achievement_percent, 50.0);
    assert_eq!(summary.milestone, Some(Milestone::Lost5));
    assert_eq!(body.notice.expect("milestone").tier, NoticeTier::Celebration);
    assert_eq!(body.notice_duration_ms, 4000);

    let chart: serde_json::Value = client
        .get(format!("{}/api/chart", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(chart["labels"][0], "2026-02-01");
    assert_eq!(chart["goal"].as_array().unwrap().len(), 4);

    drop(server);
    let _ = std::fs::remove_dir_all(data_dir);
}

#[tokio::test]
async fn http_overwrite_ignore_and_delete() {
    let data_dir = unique_data_dir("upsert");
    let server = spawn_server(&data_dir).await;
    let client = Client::new();

    record(
        &client,
        &server,
        serde_json::json!({ "date": "2026-03-10", "weight": 72.4, "meal": "ramen" }),
    )
    .await;
    record(
        &client,
        &server,
        serde_json::json!({ "date": "2026-03-10", "weight": 71.9 }),
    )
    .await;

    let ignored = record(
        &client,
        &server,
        serde_json::json!({ "date": "2026-03-11", "weight": null }),
    )
    .await;
    assert!(ignored.notice.is_none());

    let listing = page(&client, &server, 5).await;
    assert_eq!(listing.total, 1);
    assert_eq!(listing.items[0].weight, 71.9);
    assert_eq!(listing.items[0].meal, "");

    let delete = |weight: f64| {
        client
            .post(format!("{}/api/records/delete", server.base_url))
            .json(&serde_json::json!({ "date": "2026-03-10", "weight": weight }))
            .send()
    };

    let missed: DeleteResponse = delete(72.4).await.unwrap().json().await.unwrap();
    assert!(!missed.deleted);
    let removed: DeleteResponse = delete(71.9).await.unwrap().json().await.unwrap();
    assert!(removed.deleted);

    assert_eq!(page(&client, &server, 5).await.total, 0);

    drop(server);
    let _ = std::fs::remove_dir_all(data_dir);
}

#[tokio::test]
async fn http_pagination_window() {
    let data_dir = unique_data_dir("paging");
    let server = spawn_server(&data_dir).await;
    let client = Client::new();

    for day in 1..=12 {
        record(
            &client,
            &server,
            serde_json::json!({ "date": format!("2026-05-{day:02}"), "weight": 80.0 - day as f64 * 0.1 }),
        )
        .await;
    }

    let first = page(&client, &server, 5).await;
    assert_eq!(first.items.len(), 5);
    assert!(first.has_more);
    assert!(first.items[4].trend.is_none());

    let second = page(&client, &server, 10).await;
    assert_eq!(second.items.len(), 10);
    assert!(second.has_more);
    assert_eq!(second.items[4].trend, Some(Trend::Decrease));

    let third = page(&client, &server, 15).await;
    assert_eq!(third.items.len(), 12);
    assert!(!third.has_more);

    let zero = client
        .get(format!("{}/api/records?window=0", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(zero.status(), reqwest::StatusCode::BAD_REQUEST);

    drop(server);
    let _ = std::fs::remove_dir_all(data_dir);
}

#[tokio::test]
async fn http_goal_and_entries_survive_restart() {
    let data_dir = unique_data_dir("restart");
    let client = Client::new();

    {
        let server = spawn_server(&data_dir).await;

        let goal: GoalResponse = client
            .get(format!("{}/api/goal", server.base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(goal.goal, 60.0);

        let rejected: GoalResponse = client
            .put(format!("{}/api/goal", server.base_url))
            .json(&serde_json::json!({ "goal": null }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(!rejected.updated);
        assert_eq!(rejected.goal, 60.0);

        let updated: GoalResponse = client
            .put(format!("{}/api/goal", server.base_url))
            .json(&serde_json::json!({ "goal": 62.5 }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(updated.updated);

        record(
            &client,
            &server,
            serde_json::json!({ "date": "2026-06-01", "weight": 62.0 }),
        )
        .await;
    }

    let server = spawn_server(&data_dir).await;
    let body = stats(&client, &server).await;
    let summary = body.stats.expect("stats after restart");
    assert_eq!(summary.goal, 62.5);
    assert_eq!(summary.latest, 62.0);
    assert_eq!(summary.milestone, Some(Milestone::GoalReached));

    let today: TodayResponse = client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(today.date.to_string().len() == 10);

    drop(server);
    let _ = std::fs::remove_dir_all(data_dir);
}
