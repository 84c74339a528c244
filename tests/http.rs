use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

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

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_dir() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("fitness_http_{}_{}", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/exercises")).send().await {
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

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_dir = unique_data_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_fitness_tracker"))
        .env("PORT", port.to_string())
        .env("FITNESS_DATA_DIR", data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_seeded_catalog_and_idempotent_reads() {
    // Fresh server: the seed catalog must be exact and repeatable.
    let server = spawn_server().await;
    let client = Client::new();
    let url = format!("{}/api/exercises", server.base_url);

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client.get(&url).send().await.unwrap().text().await.unwrap();
    assert_eq!(first, second);

    let exercises: Vec<Value> = serde_json::from_str(&first).unwrap();
    assert_eq!(exercises.len(), 10);
    assert_eq!(exercises[0]["name"], "Push-ups");
    assert_eq!(exercises[0]["id"], 1);
    assert_eq!(exercises[9]["name"], "Plank");
    assert_eq!(exercises[9]["id"], 10);

    let created = client
        .post(&url)
        .json(&json!({ "name": "Face Pulls" }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["id"], 11);
    assert_eq!(created["category"], "other");
    assert_eq!(created["equipment"], "unknown");
}

#[tokio::test]
async fn http_create_exercise_requires_name() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/exercises", server.base_url))
        .json(&json!({ "category": "arms" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Exercise name is required");
}

#[tokio::test]
async fn http_create_workout_requires_date_and_exercises() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let url = format!("{}/api/workouts", server.base_url);

    let missing_exercises = client
        .post(&url)
        .json(&json!({ "date": "2024-03-04" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_exercises.status(), 400);

    let missing_date = client
        .post(&url)
        .json(&json!({ "exercises": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_date.status(), 400);

    let exercises_not_an_array = client
        .post(&url)
        .json(&json!({ "date": "2024-03-04", "exercises": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(exercises_not_an_array.status(), 400);
    let body: Value = exercises_not_an_array.json().await.unwrap();
    assert_eq!(body["error"], "Date and exercises array are required");
}

#[tokio::test]
async fn http_workout_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = format!("{}/api/workouts", server.base_url);

    let response = client
        .post(&base)
        .json(&json!({
            "date": "2024-03-04",
            "name": "Leg day",
            "calories": 250,
            "notes": "heavy",
            "exercises": [{ "name": "Squats", "sets": 3, "reps": 10, "weight": 60.0 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_u64().expect("assigned id");
    assert!(id >= 1);
    assert!(created["createdAt"].as_str().is_some_and(|ts| !ts.is_empty()));
    assert!(created.get("updatedAt").is_none());

    let fetched: Value = client
        .get(format!("{base}/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let updated: Value = client
        .put(format!("{base}/{id}"))
        .json(&json!({ "notes": "tweaked" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["notes"], "tweaked");
    assert_eq!(updated["date"], "2024-03-04");
    assert_eq!(updated["exercises"], created["exercises"]);
    assert!(updated["updatedAt"].as_str().is_some_and(|ts| !ts.is_empty()));

    let deleted = client.delete(format!("{base}/{id}")).send().await.unwrap();
    assert_eq!(deleted.status(), 200);
    let deleted: Value = deleted.json().await.unwrap();
    assert_eq!(deleted["message"], "Workout deleted successfully");
    assert_eq!(deleted["workout"]["id"].as_u64(), Some(id));

    let second_delete = client.delete(format!("{base}/{id}")).send().await.unwrap();
    assert_eq!(second_delete.status(), 404);

    let gone = client.get(format!("{base}/{id}")).send().await.unwrap();
    assert_eq!(gone.status(), 404);
}

#[tokio::test]
async fn http_stats_and_dashboard_agree_on_a_known_log() {
    // Own server so the numbers are deterministic.
    let server = spawn_server().await;
    let client = Client::new();
    let base = format!("{}/api/workouts", server.base_url);

    let first = client
        .post(&base)
        .json(&json!({
            "date": "2024-01-01",
            "calories": 300,
            "exercises": [
                { "name": "Squats", "sets": 3, "reps": 10, "weight": 60.0 },
                { "name": "Push-ups", "sets": 3, "reps": 15, "weight": 0.0 }
            ]
        }))
        .send()
        .await
        .unwrap();
    let first: Value = first.json().await.unwrap();
    assert_eq!(first["id"], 1);

    let second = client
        .post(&base)
        .json(&json!({
            "date": "2024-01-08",
            "calories": 200,
            "exercises": [{ "name": "Squats", "sets": 5, "reps": 5, "weight": 80.0 }]
        }))
        .send()
        .await
        .unwrap();
    let second: Value = second.json().await.unwrap();
    assert_eq!(second["id"], 2);

    let stats: Value = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["totalWorkouts"], 2);
    assert_eq!(stats["totalExercises"], 3);
    assert_eq!(stats["totalWeight"], 3800.0);
    assert_eq!(stats["averageWorkoutsPerWeek"], 2.0);
    assert_eq!(stats["mostFrequentExercise"]["name"], "Squats");
    assert_eq!(stats["mostFrequentExercise"]["count"], 2);

    let dashboard: Value = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard["totalWorkouts"], 2);
    assert_eq!(dashboard["totalCalories"], 500);
    assert_eq!(dashboard["weekly"]["labels"], json!(["2024-W01", "2024-W02"]));
    assert_eq!(dashboard["weekly"]["workouts"], json!([1, 1]));
    assert_eq!(dashboard["weekly"]["calories"], json!([300, 200]));
}
