#![allow(dead_code, clippy::unwrap_used)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary manifest with a unique name
    pub fn create_temp_manifest(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "navr_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_manifest(content, "yaml")
    }

    pub fn create_temp_toml(content: &str) -> PathBuf {
        create_temp_manifest(content, "toml")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod fixtures {
    use navrouter::navigation::{History, MemoryHistory, Router, RouterConfig};
    use navrouter::router::RouteTable;
    use std::sync::Arc;

    /// `{"": dashboard, "doctors/:id": doctorDetail}`
    pub fn small_table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("", "dashboard")
            .unwrap()
            .route("doctors/:id", "doctorDetail")
            .unwrap()
            .build()
    }

    pub fn router_with_history(
        table: RouteTable<&'static str>,
        root: &str,
        initial_url: &str,
    ) -> (Router<&'static str>, Arc<MemoryHistory>) {
        let history = Arc::new(MemoryHistory::new(initial_url));
        let router = Router::new(
            table,
            Arc::clone(&history) as Arc<dyn History>,
            RouterConfig::with_root(root),
        );
        (router, history)
    }
}
